// Sentiment scorer trait — lets a model-backed scorer replace the lexicon.

/// Trait for computing a compound polarity score.
pub trait SentimentScorer: Send + Sync {
    /// Polarity of `text` in [-1.0, 1.0]. Empty text should score 0.0.
    fn polarity(&self, text: &str) -> f64;
}
