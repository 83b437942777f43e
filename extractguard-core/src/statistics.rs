// extractguard-core/src/statistics.rs
//! Cross-document statistics over a batch of earlier extractions.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use extractguard_math::{mean, round2};

use crate::confidence::ConfidenceScores;
use crate::extracted::{has_value, ExtractedData};

/// One prior extraction: its data and the confidence scores computed for it.
///
/// Both parts default to empty when absent, and unknown keys are ignored, so a
/// serialized [`crate::EnhancedResult`] can be read back as a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    #[serde(default)]
    pub data: ExtractedData,
    #[serde(default)]
    pub confidence: ConfidenceScores,
}

/// Summary statistics for a batch of extractions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    /// Number of documents in which each field carried a value.
    pub entity_counts: BTreeMap<String, usize>,
    /// Mean confidence per field, over the documents that scored that field.
    pub average_confidence: BTreeMap<String, f64>,
    pub total_documents: usize,
}

/// Folds extraction records one at a time into [`BatchStatistics`].
#[derive(Debug, Default)]
pub struct BatchAccumulator {
    entity_counts: BTreeMap<String, usize>,
    confidences: BTreeMap<String, Vec<f64>>,
    total_documents: usize,
}

impl BatchAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &ExtractionRecord) {
        for (field, value) in &record.data {
            if has_value(value) {
                *self.entity_counts.entry(field.clone()).or_insert(0) += 1;
            }
        }

        for (field, score) in &record.confidence {
            self.confidences.entry(field.clone()).or_default().push(*score);
        }

        self.total_documents += 1;
    }

    pub fn finish(self) -> BatchStatistics {
        let average_confidence = self
            .confidences
            .into_iter()
            .map(|(field, scores)| (field, round2(mean(&scores))))
            .collect();

        debug!(
            "Aggregated {} documents covering {} fields.",
            self.total_documents,
            self.entity_counts.len()
        );

        BatchStatistics {
            entity_counts: self.entity_counts,
            average_confidence,
            total_documents: self.total_documents,
        }
    }
}

/// Aggregates a batch of extraction records into [`BatchStatistics`].
pub fn aggregate<'a, I>(extractions: I) -> BatchStatistics
where
    I: IntoIterator<Item = &'a ExtractionRecord>,
{
    extractions
        .into_iter()
        .fold(BatchAccumulator::new(), |mut acc, record| {
            acc.add(record);
            acc
        })
        .finish()
}
