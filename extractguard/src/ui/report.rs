// extractguard/src/ui/report.rs
//! Human-readable rendering of scoring results and batch statistics.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::{self, Write};

use extractguard_core::{value_text, BatchStatistics, EnhancedResult, RiskLevel, ScoringConfig};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

/// Longest value shown in a table cell before it is cut with an ellipsis.
const MAX_VALUE_WIDTH: usize = 40;

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_VALUE_WIDTH {
        value.to_string()
    } else {
        let cut: String = value.chars().take(MAX_VALUE_WIDTH - 1).collect();
        format!("{}…", cut)
    }
}

fn risk_entry(level: RiskLevel) -> ThemeEntry {
    match level {
        RiskLevel::Low => ThemeEntry::RiskLow,
        RiskLevel::Medium => ThemeEntry::RiskMedium,
        RiskLevel::High => ThemeEntry::RiskHigh,
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Prints the per-field scores, privacy metrics and overall confidence of one extraction.
pub fn print_enhanced_result<W: Write>(
    writer: &mut W,
    result: &EnhancedResult,
    config: &ScoringConfig,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint("Extraction Confidence Report", ThemeEntry::Header, theme_map, enable_colors))?;

    if result.confidence.is_empty() {
        writeln!(writer, "No fields were extracted.")?;
    } else {
        let mut table = new_table(vec!["Field", "Value", "Confidence", "Identifier"]);
        for (field, score) in &result.confidence {
            let value = result.data.get(field).map(|v| truncate(&value_text(v))).unwrap_or_default();
            let identifier = if config.is_high_risk_field(field) { "yes" } else { "" };
            table.add_row(vec![
                paint(field, ThemeEntry::FieldName, theme_map, enable_colors),
                value,
                format!("{:.2}", score),
                identifier.to_string(),
            ]);
        }
        writeln!(writer, "{}", table)?;
    }

    let risk = &result.privacy_risk;
    writeln!(writer)?;
    writeln!(writer, "{}", paint("Privacy Risk", ThemeEntry::Header, theme_map, enable_colors))?;
    writeln!(
        writer,
        "  Identifiers detected:      {}/{}",
        risk.detected_identifiers, risk.total_possible_identifiers
    )?;
    writeln!(writer, "  Risk before anonymization: {:.2}%", risk.risk_before)?;
    writeln!(writer, "  Risk after anonymization:  {:.2}%", risk.risk_after)?;
    writeln!(writer, "  k-anonymity estimate:      {}", risk.k_anonymity)?;
    writeln!(
        writer,
        "  Re-identification risk:    {}",
        paint(&risk.reidentification_risk.to_string(), risk_entry(risk.reidentification_risk), theme_map, enable_colors)
    )?;
    writeln!(writer, "  Privacy preserved:         {:.2}%", risk.privacy_preserved)?;

    let overall_entry = if result.overall_confidence > config.detection_threshold {
        ThemeEntry::ScoreHigh
    } else {
        ThemeEntry::ScoreLow
    };
    writeln!(writer)?;
    writeln!(
        writer,
        "Overall confidence: {}",
        paint(&format!("{:.2}", result.overall_confidence), overall_entry, theme_map, enable_colors)
    )?;
    Ok(())
}

/// Prints per-field document counts and average confidences for a batch.
pub fn print_batch_statistics<W: Write>(
    writer: &mut W,
    stats: &BatchStatistics,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint("Batch Extraction Statistics", ThemeEntry::Header, theme_map, enable_colors))?;
    writeln!(writer, "Documents processed: {}", stats.total_documents)?;

    let mut fields: Vec<&String> = stats.entity_counts.keys().chain(stats.average_confidence.keys()).collect();
    fields.sort();
    fields.dedup();

    if fields.is_empty() {
        writeln!(writer, "No fields found.")?;
        return Ok(());
    }

    let mut table = new_table(vec!["Field", "Documents", "Average Confidence"]);
    for field in fields {
        let count = stats.entity_counts.get(field).copied().unwrap_or(0);
        let average = stats
            .average_confidence
            .get(field)
            .map(|avg| format!("{:.2}", avg))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![paint(field, ThemeEntry::FieldName, theme_map, enable_colors), count.to_string(), average]);
    }
    writeln!(writer, "{}", table)?;
    Ok(())
}
