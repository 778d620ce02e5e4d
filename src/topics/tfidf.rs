// TF-IDF keyword extraction.
//
// The vectorizer is fitted ONCE over every review in the run, then each
// entity's reviews are transformed with that shared vocabulary and IDF.
// Refitting per entity would give every entity its own vocabulary and make
// the weights incomparable across entities.
//
// Weighting follows the usual smoothed scheme:
//   idf(t)   = ln((1 + n) / (1 + df(t))) + 1
//   row(d)   = count(t, d) * idf(t), then L2-normalized
//   score(t) = mean of row(d)[t] over the entity's reviews

use std::collections::{HashMap, HashSet};

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

use super::report::{EntityKeywords, KeywordReport, WeightedTerm};
use super::traits::KeywordExtractor;

/// Tokens are runs of two or more word characters.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Settings for fitting a [`TfIdfVectorizer`].
#[derive(Debug, Clone)]
pub struct VectorizerParams {
    /// Keep only this many terms, by corpus frequency
    pub max_features: usize,
    /// Smallest and largest n-gram size, inclusive
    pub ngram_range: (usize, usize),
    pub stop_words: HashSet<String>,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            max_features: 1000,
            ngram_range: (1, 2),
            stop_words: english_stop_words(),
        }
    }
}

/// English stop words from the `stop-words` crate.
pub fn english_stop_words() -> HashSet<String> {
    let words: Vec<String> = get(LANGUAGE::English);
    words.into_iter().collect()
}

/// A fitted TF-IDF model: vocabulary (alphabetical) and per-term IDF.
pub struct TfIdfVectorizer {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f64>,
    params: VectorizerParams,
    token_re: Regex,
}

impl TfIdfVectorizer {
    /// Fit over `documents`. Returns `None` when no terms survive
    /// tokenization and stop-word removal.
    pub fn fit(documents: &[&str], params: VectorizerParams) -> Option<Self> {
        let token_re = Regex::new(TOKEN_PATTERN).ok()?;

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut corpus_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let counts = count_terms(&token_re, doc, &params);
            for (term, count) in counts {
                *corpus_freq.entry(term.clone()).or_insert(0) += count;
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if corpus_freq.is_empty() {
            return None;
        }

        // Cap the vocabulary by corpus frequency, ties broken alphabetically
        let mut ranked: Vec<(String, usize)> = corpus_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(params.max_features.max(1));

        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let n = documents.len() as f64;
        let idf = terms
            .iter()
            .map(|t| {
                let df = doc_freq.get(t).copied().unwrap_or(0) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = terms.len(),
            "Fitted TF-IDF vectorizer"
        );

        Some(Self {
            terms,
            index,
            idf,
            params,
            token_re,
        })
    }

    /// Vocabulary in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index.get(term).map(|&i| self.idf[i])
    }

    /// Weight row for one document (dense, one entry per vocabulary term).
    /// A document with no known terms yields an all-zero row.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.terms.len()];
        for (term, count) in count_terms(&self.token_re, document, &self.params) {
            if let Some(&i) = self.index.get(&term) {
                row[i] = count as f64 * self.idf[i];
            }
        }

        let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in &mut row {
                *w /= norm;
            }
        }
        row
    }

    /// Mean weight per term across `documents`.
    pub fn mean_weights(&self, documents: &[&str]) -> Vec<f64> {
        let mut sums = vec![0.0; self.terms.len()];
        if documents.is_empty() {
            return sums;
        }
        for doc in documents {
            for (sum, w) in sums.iter_mut().zip(self.transform(doc)) {
                *sum += w;
            }
        }
        let n = documents.len() as f64;
        sums.iter_mut().for_each(|s| *s /= n);
        sums
    }
}

/// Count the n-grams of one document after stop-word removal.
fn count_terms(
    token_re: &Regex,
    document: &str,
    params: &VectorizerParams,
) -> HashMap<String, usize> {
    let lower = document.to_lowercase();
    let tokens: Vec<&str> = token_re
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !params.stop_words.contains(*t))
        .collect();

    let (min_n, max_n) = params.ngram_range;
    let mut counts = HashMap::new();
    for n in min_n.max(1)..=max_n {
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    counts
}

/// The default keyword extractor.
pub struct TfIdfKeywordExtractor {
    /// How many terms to report per entity
    pub top_n: usize,
    /// Vocabulary cap for the shared model
    pub max_features: usize,
}

impl Default for TfIdfKeywordExtractor {
    fn default() -> Self {
        Self {
            top_n: 10,
            max_features: 1000,
        }
    }
}

impl KeywordExtractor for TfIdfKeywordExtractor {
    fn extract(&self, corpus: &[(&str, &str)]) -> KeywordReport {
        let documents: Vec<&str> = corpus.iter().map(|(_, text)| *text).collect();

        let params = VectorizerParams {
            max_features: self.max_features,
            ..VectorizerParams::default()
        };

        let Some(vectorizer) = TfIdfVectorizer::fit(&documents, params) else {
            info!(
                documents = documents.len(),
                "Empty vocabulary after stop-word removal, no keywords to report"
            );
            return KeywordReport::default();
        };

        // Entities in first-appearance order
        let mut entities: Vec<&str> = Vec::new();
        for &(entity, _) in corpus {
            if !entities.contains(&entity) {
                entities.push(entity);
            }
        }

        let mut report = KeywordReport::default();
        for entity in entities {
            let rows: Vec<&str> = corpus
                .iter()
                .filter(|(e, _)| *e == entity)
                .map(|(_, text)| *text)
                .collect();
            if rows.is_empty() {
                continue;
            }

            let means = vectorizer.mean_weights(&rows);
            let terms = top_terms(vectorizer.terms(), &means, self.top_n);

            report.entities.push(EntityKeywords {
                entity: entity.to_string(),
                terms,
            });
        }

        info!(
            entities = report.len(),
            vocabulary = vectorizer.terms().len(),
            "Extracted keywords"
        );

        report
    }
}

/// Highest-weighted terms, descending; ties keep vocabulary order.
/// Terms with zero weight (absent from every row) are not reported.
fn top_terms(terms: &[String], weights: &[f64], n: usize) -> Vec<WeightedTerm> {
    let mut order: Vec<usize> = (0..terms.len()).filter(|&i| weights[i] > 0.0).collect();
    order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]).then(a.cmp(&b)));

    order
        .into_iter()
        .take(n)
        .map(|i| WeightedTerm {
            term: terms[i].clone(),
            weight: weights[i],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(stop: &[&str], max_features: usize) -> VectorizerParams {
        VectorizerParams {
            max_features,
            ngram_range: (1, 2),
            stop_words: stop.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_fit_builds_unigrams_and_bigrams() {
        let v = TfIdfVectorizer::fit(&["the app crashes"], params(&["the"], 100)).unwrap();
        assert_eq!(v.terms(), &["app", "app crashes", "crashes"]);
    }

    #[test]
    fn test_smoothed_idf_and_l2_rows() {
        let v = TfIdfVectorizer::fit(&["aa bb", "aa cc"], params(&[], 100)).unwrap();
        // aa appears in both documents, bb in one
        assert!((v.idf("aa").unwrap() - 1.0).abs() < 1e-9);
        assert!((v.idf("bb").unwrap() - (1.5f64.ln() + 1.0)).abs() < 1e-9);

        let row = v.transform("aa bb");
        let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        let aa = v.terms().iter().position(|t| t == "aa").unwrap();
        assert!((row[aa] - 0.4494).abs() < 0.001, "got {}", row[aa]);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let v = TfIdfVectorizer::fit(&["aa aa aa bb bb cc"], params(&[], 2)).unwrap();
        assert_eq!(v.terms(), &["aa", "aa aa"]);
    }

    #[test]
    fn test_single_char_tokens_ignored() {
        assert!(TfIdfVectorizer::fit(&["a b c", ""], params(&[], 10)).is_none());
    }

    #[test]
    fn test_unknown_document_is_zero_row() {
        let v = TfIdfVectorizer::fit(&["transfer slow"], params(&[], 10)).unwrap();
        assert!(v.transform("otp password").iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_top_terms_ordering() {
        let terms: Vec<String> = ["aa", "bb", "cc", "dd"].iter().map(|s| s.to_string()).collect();
        let top = top_terms(&terms, &[0.2, 0.5, 0.0, 0.2], 3);
        let names: Vec<&str> = top.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(names, vec!["bb", "aa", "dd"]);
    }

    #[test]
    fn test_extract_empty_corpus() {
        let report = TfIdfKeywordExtractor::default().extract(&[]);
        assert!(report.is_empty());
    }
}
