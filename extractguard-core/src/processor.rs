// File: extractguard-core/src/processor.rs

//! `processor.rs`
//! One-shot wrapper that turns a raw model response into a scored, risk-assessed result.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use extractguard_math::{mean, round2};

use crate::confidence::{score_with_config, ConfidenceScores};
use crate::config::ScoringConfig;
use crate::errors::Result;
use crate::extracted::{parse_extracted_data, ExtractedData};
use crate::privacy::{estimate_risk_with_config, PrivacyRiskMetrics};

/// An extraction enriched with confidence scores and privacy-risk metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedResult {
    /// The parsed model response, unchanged.
    pub data: ExtractedData,
    pub confidence: ConfidenceScores,
    pub privacy_risk: PrivacyRiskMetrics,
    /// Mean of every field score (including zeros); `0.0` when nothing was extracted.
    pub overall_confidence: f64,
}

/// Parses the model response, scores it against `document_text`, and estimates
/// privacy risk, using the built-in heuristics.
///
/// # Arguments
///
/// * `document_text` - The source document the model extracted from.
/// * `model_response` - The model's JSON object of field/value pairs.
///
/// # Errors
///
/// Returns [`crate::ExtractGuardError::Parse`] or
/// [`crate::ExtractGuardError::NotAnObject`] when the response is not a JSON object.
pub fn process(document_text: &str, model_response: &str) -> Result<EnhancedResult> {
    process_with_config(ScoringConfig::defaults(), document_text, model_response)
}

pub fn process_with_config(
    config: &ScoringConfig,
    document_text: &str,
    model_response: &str,
) -> Result<EnhancedResult> {
    let data = parse_extracted_data(model_response)?;
    Ok(enhance_with_config(config, data, document_text))
}

/// Scores already-parsed extracted data. Takes ownership so the data is moved,
/// not copied, into the result.
pub fn enhance_with_config(config: &ScoringConfig, data: ExtractedData, document_text: &str) -> EnhancedResult {
    if data.is_empty() {
        warn!("Model response contained no fields; nothing to score.");
    }

    let confidence = score_with_config(config, &data, document_text);
    let privacy_risk = estimate_risk_with_config(config, &data, &confidence);
    let overall_confidence = overall_confidence(&confidence);

    info!(
        "Processed extraction: {} fields, overall confidence {:.2}.",
        data.len(),
        overall_confidence
    );

    EnhancedResult {
        data,
        confidence,
        privacy_risk,
        overall_confidence,
    }
}

/// Mean of all confidence scores rounded to two decimals, or `0.0` for an empty map.
pub fn overall_confidence(scores: &ConfidenceScores) -> f64 {
    let values: Vec<f64> = scores.values().copied().collect();
    round2(mean(&values))
}
