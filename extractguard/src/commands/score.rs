//! `score` command: scores one model response against its source document.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use extractguard_core::{process_with_config, EnhancedResult, ScoringConfig};

use crate::ui::report;
use crate::ui::theme::ThemeMap;

/// Options for a single `score` run.
pub struct ScoreOptions {
    pub document_text: String,
    pub model_response: String,
    pub json: bool,
    pub json_file: Option<PathBuf>,
    pub fail_over_risk: Option<f64>,
}

/// What the caller needs to decide the exit status.
#[derive(Debug)]
pub struct ScoreOutcome {
    pub result: EnhancedResult,
    /// Set when `--fail-over-risk` was given and the risk before anonymization exceeded it.
    pub risk_exceeded: bool,
}

/// Runs the scorer and writes the report (or JSON) to `out`.
pub fn run_score<W: Write>(
    config: &ScoringConfig,
    opts: ScoreOptions,
    theme_map: &ThemeMap,
    enable_colors: bool,
    out: &mut W,
) -> Result<ScoreOutcome> {
    info!("Starting score operation.");

    let result = process_with_config(config, &opts.document_text, &opts.model_response)
        .context("Failed to process model response")?;

    debug!(
        "Scored {} fields; {} identifiers detected.",
        result.confidence.len(),
        result.privacy_risk.detected_identifiers
    );

    if let Some(path) = &opts.json_file {
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write JSON result to {}", path.display()))?;
        info!("Wrote JSON result to {}", path.display());
    }

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        report::print_enhanced_result(out, &result, config, theme_map, enable_colors)?;
    }

    let risk_exceeded = opts
        .fail_over_risk
        .is_some_and(|limit| result.privacy_risk.risk_before > limit);

    info!("Score operation completed.");
    Ok(ScoreOutcome { result, risk_exceeded })
}
