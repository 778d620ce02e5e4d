// Keyword discovery — TF-IDF weighting fitted over the whole corpus and
// ranked per source entity.

pub mod report;
pub mod tfidf;
pub mod traits;
