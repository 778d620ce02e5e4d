// Keyword extractor trait — swap-ready abstraction.
//
// The default implementation is TF-IDF over unigrams and bigrams; an
// embeddings-based extractor could replace it without touching the pipeline.

use super::report::KeywordReport;

/// Trait for building a per-entity keyword report.
pub trait KeywordExtractor {
    /// `corpus` is `(entity, normalized text)` per review, in table order.
    /// A degenerate corpus yields an empty report rather than an error.
    ///
    /// The configured term count is an upper bound: terms that never occur
    /// in an entity's reviews are left out, so an entity with little text
    /// can report fewer.
    fn extract(&self, corpus: &[(&str, &str)]) -> KeywordReport;
}
