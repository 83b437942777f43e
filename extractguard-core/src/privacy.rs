// extractguard-core/src/privacy.rs
//! Simplified privacy-risk estimate derived from confidently extracted identifiers.
//!
//! This is an illustrative calculator, not a statistical privacy model: the
//! k-anonymity figure and the flat anonymization credit are fixed heuristics.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

use extractguard_math::{percent_of, round2};

use crate::config::ScoringConfig;
use crate::confidence::ConfidenceScores;
use crate::extracted::{is_truthy, ExtractedData};

/// Three-level re-identification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(label)
    }
}

/// Aggregate risk metrics for a single extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacyRiskMetrics {
    /// Share of high-risk identifiers confidently detected, in percent.
    #[serde(rename = "risk_before_anonymization")]
    pub risk_before: f64,
    /// Remaining risk after the fixed anonymization credit; never negative.
    #[serde(rename = "risk_after_anonymization")]
    pub risk_after: f64,
    /// Heuristic count of indistinguishable records; always at least 1.
    #[serde(rename = "k_anonymity_estimate")]
    pub k_anonymity: u64,
    pub reidentification_risk: RiskLevel,
    pub detected_identifiers: usize,
    pub total_possible_identifiers: usize,
    pub privacy_preserved: f64,
}

/// Estimates privacy risk using the built-in identifier list and thresholds.
pub fn estimate_risk(extracted_data: &ExtractedData, confidence_scores: &ConfidenceScores) -> PrivacyRiskMetrics {
    estimate_risk_with_config(ScoringConfig::defaults(), extracted_data, confidence_scores)
}

pub fn estimate_risk_with_config(
    config: &ScoringConfig,
    extracted_data: &ExtractedData,
    confidence_scores: &ConfidenceScores,
) -> PrivacyRiskMetrics {
    let detected = count_detected_identifiers(config, extracted_data, confidence_scores);
    let total = config.high_risk_fields.len();

    let risk_before = percent_of(detected, total);
    let risk_after = (risk_before - config.anonymization_reduction).max(0.0);
    let privacy_preserved = (1.0 - risk_after / 100.0) * 100.0;

    let metrics = PrivacyRiskMetrics {
        risk_before: round2(risk_before),
        risk_after: round2(risk_after),
        k_anonymity: k_anonymity_estimate(config.k_anonymity_population, detected),
        reidentification_risk: reidentification_level(config, detected),
        detected_identifiers: detected,
        total_possible_identifiers: total,
        privacy_preserved: round2(privacy_preserved),
    };

    info!(
        "Privacy risk: {}/{} identifiers detected, risk {} ({:.2}% before anonymization).",
        detected, total, metrics.reidentification_risk, metrics.risk_before
    );
    metrics
}

/// Counts high-risk fields that are present and scored strictly above the detection threshold.
pub fn count_detected_identifiers(
    config: &ScoringConfig,
    extracted_data: &ExtractedData,
    confidence_scores: &ConfidenceScores,
) -> usize {
    config
        .high_risk_fields
        .iter()
        .filter(|field| {
            let present = extracted_data.get(field.as_str()).is_some_and(is_truthy);
            let confidence = confidence_scores.get(field.as_str()).copied().unwrap_or(0.0);
            let detected = present && confidence > config.detection_threshold;
            if present && !detected {
                debug!("Identifier '{}' present but below threshold ({:.2}).", field, confidence);
            }
            detected
        })
        .count()
}

/// `population / 2^detected`, integer division, floored at 1.
pub fn k_anonymity_estimate(population: u64, detected: usize) -> u64 {
    let divisor = u32::try_from(detected)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
        .unwrap_or(0);
    if divisor == 0 {
        return 1;
    }
    (population / divisor).max(1)
}

pub fn reidentification_level(config: &ScoringConfig, detected: usize) -> RiskLevel {
    if detected >= config.high_risk_threshold {
        RiskLevel::High
    } else if detected >= config.medium_risk_threshold {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
