// Row types for the input table, the enriched table and the summary table.

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentLabel;
use crate::themes::join_themes;
use crate::translate::traits::{DetectedLanguage, Translation};

/// One review as loaded from the input table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique within a run; synthesized from the row position when absent
    pub review_id: String,
    /// Raw review text; empty when the source had none
    pub review: String,
    /// Source entity (the bank or app the review is about)
    pub bank: String,
    pub rating: Option<f64>,
    pub date: String,
    /// Origin tag (e.g. "Google Play")
    pub source: String,
}

/// A review after translation, normalization, scoring and tagging.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub record: Record,
    /// How the text was (or wasn't) translated
    pub translation: Translation,
    pub normalized: String,
    pub sentiment_label: SentimentLabel,
    /// Compound score in [-1, 1]
    pub sentiment_score: f64,
    /// Never empty; `["Other"]` when no theme matched
    pub themes: Vec<String>,
}

impl EnrichedRecord {
    /// Text used for analysis (translated, or the original on fallback).
    pub fn translated(&self) -> &str {
        self.translation.text()
    }

    pub fn language(&self) -> &DetectedLanguage {
        self.translation.language()
    }

    /// The row written to the enriched output table.
    pub fn to_row(&self) -> EnrichedRow {
        EnrichedRow {
            review_id: self.record.review_id.clone(),
            review_text: self.record.review.clone(),
            sentiment_label: self.sentiment_label,
            sentiment_score: self.sentiment_score,
            identified_themes: join_themes(&self.themes),
        }
    }
}

/// Column layout of the enriched output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRow {
    pub review_id: String,
    pub review_text: String,
    pub sentiment_label: SentimentLabel,
    pub sentiment_score: f64,
    /// Theme labels joined by ", "
    pub identified_themes: String,
}

/// Mean sentiment for one (entity, rating) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub bank: String,
    pub rating: f64,
    pub sentiment_score: f64,
}
