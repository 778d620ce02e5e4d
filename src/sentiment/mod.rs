// Sentiment scoring — a swappable polarity scorer plus fixed label buckets.
//
// The scorer produces a compound score in [-1, 1]; the label thresholds are
// symmetric around zero with a small neutral dead-band.

pub mod lexicon;
pub mod traits;

use serde::{Deserialize, Serialize};

/// Scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Discrete sentiment bucket for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Bucket a compound score. NaN falls through to neutral.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= POSITIVE_THRESHOLD => SentimentLabel::Positive,
            s if s <= NEGATIVE_THRESHOLD => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scored review: bounded compound score and its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub score: f64,
    pub label: SentimentLabel,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(-1.0, 1.0) };
        Self {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

/// Score `text` with `scorer` and attach the label.
pub fn analyze(scorer: &dyn traits::SentimentScorer, text: &str) -> Sentiment {
    Sentiment::from_score(scorer.polarity(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_clamps() {
        let s = Sentiment::from_score(3.0);
        assert_eq!(s.score, 1.0);
        assert_eq!(s.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_nan_is_neutral_zero() {
        let s = Sentiment::from_score(f64::NAN);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.label, SentimentLabel::Neutral);
    }
}
