// extractguard-core/src/lib.rs
//! # ExtractGuard Core Library
//!
//! `extractguard-core` scores fields that an upstream model extracted from a
//! free-text (typically medical) document, estimates how identifying the
//! extraction is, and summarises batches of earlier extractions.
//!
//! Everything here is a pure function over in-memory data: no I/O beyond
//! optionally reading a YAML config file, no shared mutable state, and every
//! call is safe to run concurrently.
//!
//! ## Modules
//!
//! * `confidence`: Per-field confidence scores from exact and fuzzy text matching.
//! * `privacy`: Risk percentages, a k-anonymity estimate and a re-identification label.
//! * `statistics`: Cross-document entity counts and average confidences.
//! * `processor`: One-shot wrapper from raw model response to [`EnhancedResult`].
//! * `config`: Heuristic constants, YAML overrides and validation.
//! * `extracted`: The extracted-data model and value presence/coercion rules.
//! * `redaction`: Keeps extracted values out of debug logs.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use extractguard_core::{process, RiskLevel};
//!
//! fn main() -> Result<(), extractguard_core::ExtractGuardError> {
//!     let report = "Patient John Smith, ID X1, lives in Munich.";
//!     let response = r#"{"patientName": "John Smith", "patientID": "X1", "patientCity": "Munich"}"#;
//!
//!     let result = process(report, response)?;
//!     assert_eq!(result.confidence["patientName"], 0.9);
//!     assert_eq!(result.privacy_risk.reidentification_risk, RiskLevel::Medium);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`ExtractGuardError`]. Only parsing the model
//! response and loading configuration can fail; scoring itself is total.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod confidence;
pub mod config;
pub mod errors;
pub mod extracted;
pub mod privacy;
pub mod processor;
pub mod redaction;
pub mod statistics;

/// Re-exports the confidence scorer.
pub use confidence::{score, score_with_config, ConfidenceScores, MatchKind};

/// Re-exports configuration types and the built-in heuristic constants.
pub use config::{
    merge_config,
    ScoringConfig,
    ScoringOverrides,
    BONUS_FIELDS,
    DEFAULT_CONFIG,
    HIGH_RISK_FIELDS,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ExtractGuardError;

pub use extracted::{has_value, parse_extracted_data, value_text, ExtractedData};

/// Re-exports the privacy risk estimator.
pub use privacy::{estimate_risk, estimate_risk_with_config, PrivacyRiskMetrics, RiskLevel};

/// Re-exports the orchestration wrapper.
pub use processor::{enhance_with_config, overall_confidence, process, process_with_config, EnhancedResult};

/// Re-exports the batch statistics aggregator.
pub use statistics::{aggregate, BatchAccumulator, BatchStatistics, ExtractionRecord};
