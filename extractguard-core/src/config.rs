//! Configuration management for `extractguard-core`.
//!
//! Every constant of the confidence and privacy-risk heuristics lives in
//! [`ScoringConfig`]. The built-in values are exposed as module constants and as a
//! process-wide [`DEFAULT_CONFIG`]; a YAML file of [`ScoringOverrides`] can replace
//! any subset of them.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::{ExtractGuardError, Result};

/// Field names treated as personally identifying when estimating privacy risk.
pub const HIGH_RISK_FIELDS: [&str; 8] = [
    "patientName",
    "patientFirstName",
    "patientLastName",
    "patientBirthDate",
    "patientID",
    "patientStreet",
    "patientPostalCode",
    "patientCity",
];

/// Fields whose extractions are usually reliable (IDs and dates) and earn a score bonus.
pub const BONUS_FIELDS: [&str; 2] = ["patientID", "patientBirthDate"];

pub const EXACT_MATCH_SCORE: f64 = 0.9;
pub const FUZZY_BASE_SCORE: f64 = 0.5;
pub const FUZZY_MATCH_WEIGHT: f64 = 0.3;
pub const EMPTY_WORDS_SCORE: f64 = 0.3;
/// Words must be strictly longer than this to count towards a fuzzy match.
pub const MIN_FUZZY_WORD_LEN: usize = 3;
pub const FIELD_BONUS: f64 = 0.1;
/// Values shorter than this many characters are penalised.
pub const SHORT_VALUE_LEN: usize = 3;
pub const SHORT_VALUE_PENALTY: f64 = 0.7;
/// A high-risk field only counts as detected when its score is strictly above this.
pub const DETECTION_THRESHOLD: f64 = 0.6;
/// Flat risk reduction (in percentage points) credited to upstream anonymization.
pub const ANONYMIZATION_REDUCTION: f64 = 85.0;
pub const K_ANONYMITY_POPULATION: u64 = 1000;
pub const HIGH_RISK_THRESHOLD: usize = 5;
pub const MEDIUM_RISK_THRESHOLD: usize = 3;

/// The built-in scoring configuration, built once on first use.
pub static DEFAULT_CONFIG: Lazy<ScoringConfig> = Lazy::new(ScoringConfig::default);

/// The complete set of heuristic parameters used by the scorer and risk estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub exact_match_score: f64,
    pub fuzzy_base_score: f64,
    pub fuzzy_match_weight: f64,
    pub empty_words_score: f64,
    pub min_fuzzy_word_len: usize,
    pub bonus_fields: Vec<String>,
    pub field_bonus: f64,
    pub short_value_len: usize,
    pub short_value_penalty: f64,
    pub high_risk_fields: Vec<String>,
    pub detection_threshold: f64,
    pub anonymization_reduction: f64,
    pub k_anonymity_population: u64,
    pub high_risk_threshold: usize,
    pub medium_risk_threshold: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_match_score: EXACT_MATCH_SCORE,
            fuzzy_base_score: FUZZY_BASE_SCORE,
            fuzzy_match_weight: FUZZY_MATCH_WEIGHT,
            empty_words_score: EMPTY_WORDS_SCORE,
            min_fuzzy_word_len: MIN_FUZZY_WORD_LEN,
            bonus_fields: BONUS_FIELDS.iter().map(|f| f.to_string()).collect(),
            field_bonus: FIELD_BONUS,
            short_value_len: SHORT_VALUE_LEN,
            short_value_penalty: SHORT_VALUE_PENALTY,
            high_risk_fields: HIGH_RISK_FIELDS.iter().map(|f| f.to_string()).collect(),
            detection_threshold: DETECTION_THRESHOLD,
            anonymization_reduction: ANONYMIZATION_REDUCTION,
            k_anonymity_population: K_ANONYMITY_POPULATION,
            high_risk_threshold: HIGH_RISK_THRESHOLD,
            medium_risk_threshold: MEDIUM_RISK_THRESHOLD,
        }
    }
}

/// A partial configuration as read from a user's YAML file.
///
/// Absent keys keep their default; unknown keys are rejected so that a typo
/// does not silently fall back to the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringOverrides {
    pub exact_match_score: Option<f64>,
    pub fuzzy_base_score: Option<f64>,
    pub fuzzy_match_weight: Option<f64>,
    pub empty_words_score: Option<f64>,
    pub min_fuzzy_word_len: Option<usize>,
    pub bonus_fields: Option<Vec<String>>,
    pub field_bonus: Option<f64>,
    pub short_value_len: Option<usize>,
    pub short_value_penalty: Option<f64>,
    pub high_risk_fields: Option<Vec<String>>,
    pub detection_threshold: Option<f64>,
    pub anonymization_reduction: Option<f64>,
    pub k_anonymity_population: Option<u64>,
    pub high_risk_threshold: Option<usize>,
    pub medium_risk_threshold: Option<usize>,
}

impl ScoringOverrides {
    /// Loads scoring overrides from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scoring overrides from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parses scoring overrides from YAML text. An empty document yields no overrides.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(text)?)
    }
}

impl ScoringConfig {
    /// Returns the shared built-in configuration.
    pub fn defaults() -> &'static ScoringConfig {
        &DEFAULT_CONFIG
    }

    /// Builds the effective configuration: defaults, optionally overridden by a YAML
    /// file, then validated.
    pub fn load(overrides_path: Option<&Path>) -> Result<Self> {
        let overrides = match overrides_path {
            Some(path) => Some(ScoringOverrides::load_from_file(path)?),
            None => None,
        };
        let config = merge_config(ScoringConfig::default(), overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn is_bonus_field(&self, field: &str) -> bool {
        self.bonus_fields.iter().any(|f| f == field)
    }

    pub fn is_high_risk_field(&self, field: &str) -> bool {
        self.high_risk_fields.iter().any(|f| f == field)
    }

    /// Checks every parameter and reports all violations at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        let unit_interval = [
            ("exact_match_score", self.exact_match_score),
            ("fuzzy_base_score", self.fuzzy_base_score),
            ("fuzzy_match_weight", self.fuzzy_match_weight),
            ("empty_words_score", self.empty_words_score),
            ("field_bonus", self.field_bonus),
            ("short_value_penalty", self.short_value_penalty),
            ("detection_threshold", self.detection_threshold),
        ];
        for (name, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                errors.push(format!("'{}' must be between 0.0 and 1.0, got {}.", name, value));
            }
        }

        if self.fuzzy_base_score + self.fuzzy_match_weight > 1.0 {
            errors.push(format!(
                "'fuzzy_base_score' + 'fuzzy_match_weight' must not exceed 1.0, got {}.",
                self.fuzzy_base_score + self.fuzzy_match_weight
            ));
        }

        if !(0.0..=100.0).contains(&self.anonymization_reduction) {
            errors.push(format!(
                "'anonymization_reduction' must be between 0 and 100, got {}.",
                self.anonymization_reduction
            ));
        }

        if self.k_anonymity_population == 0 {
            errors.push("'k_anonymity_population' must be at least 1.".to_string());
        }

        if self.medium_risk_threshold > self.high_risk_threshold {
            errors.push(format!(
                "'medium_risk_threshold' ({}) cannot exceed 'high_risk_threshold' ({}).",
                self.medium_risk_threshold, self.high_risk_threshold
            ));
        }

        if self.high_risk_fields.is_empty() {
            errors.push("'high_risk_fields' cannot be empty.".to_string());
        }
        check_field_list("high_risk_fields", &self.high_risk_fields, &mut errors);
        check_field_list("bonus_fields", &self.bonus_fields, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ExtractGuardError::InvalidConfig(errors.join("\n")))
        }
    }
}

fn check_field_list(list_name: &str, fields: &[String], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for field in fields {
        if field.trim().is_empty() {
            errors.push(format!("'{}' contains an empty field name.", list_name));
        } else if !seen.insert(field.as_str()) {
            errors.push(format!("Duplicate field '{}' in '{}'.", field, list_name));
        }
    }
}

/// Applies user overrides on top of a base configuration.
pub fn merge_config(base: ScoringConfig, overrides: Option<ScoringOverrides>) -> ScoringConfig {
    let Some(user) = overrides else {
        debug!("No scoring overrides supplied, using built-in defaults.");
        return base;
    };

    let mut merged = base;

    macro_rules! apply {
        ($($field:ident),+ $(,)?) => {
            $(
                if let Some(value) = user.$field {
                    debug!("Overriding {} with user value: {:?}", stringify!($field), value);
                    merged.$field = value;
                }
            )+
        };
    }

    apply!(
        exact_match_score,
        fuzzy_base_score,
        fuzzy_match_weight,
        empty_words_score,
        min_fuzzy_word_len,
        bonus_fields,
        field_bonus,
        short_value_len,
        short_value_penalty,
        high_risk_fields,
        detection_threshold,
        anonymization_reduction,
        k_anonymity_population,
        high_risk_threshold,
        medium_risk_threshold,
    );

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
        assert_eq!(ScoringConfig::defaults().high_risk_fields.len(), 8);
    }

    #[test]
    fn test_field_membership() {
        let config = ScoringConfig::defaults();
        assert!(config.is_bonus_field("patientID"));
        assert!(config.is_bonus_field("patientBirthDate"));
        assert!(!config.is_bonus_field("patientName"));
        assert!(config.is_high_risk_field("patientCity"));
        assert!(!config.is_high_risk_field("diagnosis"));
    }

    #[test]
    fn test_merge_applies_only_present_fields() {
        let overrides = ScoringOverrides {
            detection_threshold: Some(0.8),
            bonus_fields: Some(vec!["caseNumber".to_string()]),
            ..Default::default()
        };
        let merged = merge_config(ScoringConfig::default(), Some(overrides));
        assert_eq!(merged.detection_threshold, 0.8);
        assert_eq!(merged.bonus_fields, vec!["caseNumber".to_string()]);
        assert_eq!(merged.exact_match_score, EXACT_MATCH_SCORE);
        assert_eq!(merged.high_risk_fields.len(), 8);
    }

    #[test]
    fn test_merge_without_overrides_is_identity() {
        assert_eq!(merge_config(ScoringConfig::default(), None), ScoringConfig::default());
    }

    #[test]
    fn test_validate_collects_every_violation() {
        let config = ScoringConfig {
            exact_match_score: 1.5,
            k_anonymity_population: 0,
            medium_risk_threshold: 6,
            high_risk_fields: vec!["patientID".to_string(), "patientID".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("exact_match_score"));
        assert!(err.contains("k_anonymity_population"));
        assert!(err.contains("medium_risk_threshold"));
        assert!(err.contains("Duplicate field 'patientID'"));
    }

    #[test]
    fn test_empty_yaml_yields_no_overrides() {
        assert_eq!(ScoringOverrides::from_yaml("  \n").unwrap(), ScoringOverrides::default());
    }

    #[test]
    fn test_unknown_yaml_key_is_rejected() {
        let result = ScoringOverrides::from_yaml("detection_treshold: 0.7\n");
        assert!(matches!(result, Err(ExtractGuardError::ConfigParse(_))));
    }
}
