// KeywordReport — the top weighted terms for each source entity.

use serde::{Deserialize, Serialize};

/// A term and its mean TF-IDF weight across an entity's reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
}

/// The ranked keywords for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityKeywords {
    pub entity: String,
    /// Descending by weight
    pub terms: Vec<WeightedTerm>,
}

/// Keyword report for a whole run, entities in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub entities: Vec<EntityKeywords>,
}

impl KeywordReport {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Terms for `entity`, best first.
    pub fn terms_for(&self, entity: &str) -> Option<Vec<&str>> {
        self.entities
            .iter()
            .find(|e| e.entity == entity)
            .map(|e| e.terms.iter().map(|t| t.term.as_str()).collect())
    }
}
