//! `stats` command: aggregates earlier extraction records.

use anyhow::{Context, Result};
use log::{info, warn};
use std::io::Write;

use extractguard_core::{BatchAccumulator, BatchStatistics, ExtractionRecord};

use crate::ui::report;
use crate::ui::theme::ThemeMap;

/// Parses records from a JSON array, or from a stream of JSON objects.
///
/// A stream covers JSON Lines as well as pretty-printed records written one
/// after another, such as concatenated `score --json` output.
pub fn parse_records(input: &str) -> Result<Vec<ExtractionRecord>> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        warn!("No extraction records supplied.");
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("Failed to parse extraction records as a JSON array");
    }

    serde_json::Deserializer::from_str(input)
        .into_iter::<ExtractionRecord>()
        .enumerate()
        .map(|(index, record)| {
            record.with_context(|| format!("Failed to parse extraction record {}", index + 1))
        })
        .collect()
}

/// Aggregates the records in `input` and writes a table (or JSON) to `out`.
pub fn run_stats<W: Write>(
    input: &str,
    json: bool,
    theme_map: &ThemeMap,
    enable_colors: bool,
    out: &mut W,
) -> Result<BatchStatistics> {
    let records = parse_records(input)?;

    let mut accumulator = BatchAccumulator::new();
    for record in &records {
        accumulator.add(record);
    }
    let stats = accumulator.finish();
    info!("Aggregated statistics for {} documents.", stats.total_documents);

    if json {
        serde_json::to_writer_pretty(&mut *out, &stats)?;
        writeln!(out)?;
    } else {
        report::print_batch_statistics(out, &stats, theme_map, enable_colors)?;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() -> Result<()> {
        let records = parse_records(r#"[{"data": {"a": "x"}}, {"confidence": {"a": 0.5}}]"#)?;
        assert_eq!(records.len(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_json_lines() -> Result<()> {
        let input = "{\"data\": {\"a\": \"x\"}, \"confidence\": {\"a\": 0.4}}\n\n{\"data\": {\"a\": \"y\"}, \"confidence\": {\"a\": 0.6}}\n";
        let records = parse_records(input)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].confidence["a"], 0.6);
        Ok(())
    }

    #[test]
    fn test_parse_pretty_printed_records() -> Result<()> {
        let input = "{\n  \"data\": {\"a\": \"x\"},\n  \"confidence\": {\"a\": 0.4}\n}\n{\n  \"confidence\": {\"a\": 0.8}\n}\n";
        let records = parse_records(input)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].data["a"], "x");
        assert_eq!(records[1].confidence["a"], 0.8);
        Ok(())
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = parse_records("{\"data\": {}}\n{oops}\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_empty_input_is_an_empty_batch() -> Result<()> {
        let stats = run_stats("   ", true, &crate::ui::theme::ThemeStyle::default_theme_map(), false, &mut Vec::new())?;
        assert_eq!(stats.total_documents, 0);
        Ok(())
    }
}
