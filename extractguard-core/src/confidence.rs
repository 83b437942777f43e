// extractguard-core/src/confidence.rs
//! Heuristic per-field confidence scoring.
//!
//! A field's score reflects how well its extracted value is supported by the
//! source document: a verbatim (case-insensitive) occurrence scores highest,
//! partial word overlap scores in between, and unsupported values fall back to
//! a floor. Field-type bonuses and a short-value penalty are applied on top and
//! the result is rounded to two decimals.

use log::info;
use std::collections::BTreeMap;

use extractguard_math::{ratio, round2, Score};

use crate::config::ScoringConfig;
use crate::extracted::{has_value, value_text, ExtractedData};
use crate::redaction::log_field_score_debug;

/// Field name to confidence score in `[0.0, 1.0]`.
pub type ConfidenceScores = BTreeMap<String, Score>;

/// How a value was found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The value was empty or the `"null"` marker.
    Missing,
    /// The whole value occurs verbatim in the text.
    Exact,
    /// Only individual words (or none) of the value occur in the text.
    Fuzzy,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Missing => "missing",
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy => "fuzzy",
        }
    }
}

/// Scores every extracted field against the original document using the built-in heuristics.
pub fn score(extracted_data: &ExtractedData, original_text: &str) -> ConfidenceScores {
    score_with_config(ScoringConfig::defaults(), extracted_data, original_text)
}

/// Scores every extracted field against the original document.
///
/// One entry is produced per field in `extracted_data`, including fields whose
/// value is missing (those score `0.0`).
pub fn score_with_config(
    config: &ScoringConfig,
    extracted_data: &ExtractedData,
    original_text: &str,
) -> ConfidenceScores {
    let haystack = original_text.to_lowercase();

    let scores: ConfidenceScores = extracted_data
        .iter()
        .map(|(field, value)| {
            if !has_value(value) {
                log_field_score_debug(field, "", MatchKind::Missing.as_str(), 0.0);
                return (field.clone(), 0.0);
            }

            let text = value_text(value);
            let (kind, base) = base_score(config, &text, &haystack);
            let adjusted = adjust_for_field(config, field, &text, base);
            let final_score = round2(adjusted);

            log_field_score_debug(field, &text, kind.as_str(), final_score);
            (field.clone(), final_score)
        })
        .collect();

    info!(
        "Scored {} extracted fields against {} chars of source text.",
        scores.len(),
        original_text.chars().count()
    );
    scores
}

/// Computes the match-based score for a value before any field adjustments.
///
/// `haystack` must already be lower-cased.
pub fn base_score(config: &ScoringConfig, value: &str, haystack: &str) -> (MatchKind, Score) {
    if haystack.contains(&value.to_lowercase()) {
        return (MatchKind::Exact, config.exact_match_score);
    }

    let words: Vec<&str> = value.split_whitespace().collect();
    if words.is_empty() {
        return (MatchKind::Fuzzy, config.empty_words_score);
    }

    let matched = words
        .iter()
        .filter(|word| word.chars().count() > config.min_fuzzy_word_len)
        .filter(|word| haystack.contains(&word.to_lowercase()))
        .count();

    let score = config.fuzzy_base_score + ratio(matched, words.len()) * config.fuzzy_match_weight;
    (MatchKind::Fuzzy, score)
}

/// Applies the reliable-field bonus (capped at 1.0), then the short-value penalty.
fn adjust_for_field(config: &ScoringConfig, field: &str, value: &str, base: Score) -> Score {
    let mut adjusted = base;
    if config.is_bonus_field(field) {
        adjusted = (adjusted + config.field_bonus).min(1.0);
    }
    if value.chars().count() < config.short_value_len {
        adjusted *= config.short_value_penalty;
    }
    adjusted
}
