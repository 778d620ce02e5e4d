// Grouped summary and run statistics.

use crate::records::models::{EnrichedRecord, SummaryRow};
use crate::sentiment::SentimentLabel;
use crate::themes::UNCLASSIFIED_THEME;
use crate::translate::traits::DetectedLanguage;

/// Mean sentiment score per (entity, rating), ordered by entity then rating.
///
/// Records without a rating form no group.
pub fn summarize(records: &[EnrichedRecord]) -> Vec<SummaryRow> {
    // (bank, rating, score sum, count)
    let mut groups: Vec<(String, f64, f64, usize)> = Vec::new();

    for r in records {
        let Some(rating) = r.record.rating.filter(|x| !x.is_nan()) else {
            continue;
        };
        match groups
            .iter_mut()
            .find(|g| g.0 == r.record.bank && g.1 == rating)
        {
            Some(group) => {
                group.2 += r.sentiment_score;
                group.3 += 1;
            }
            None => groups.push((r.record.bank.clone(), rating, r.sentiment_score, 1)),
        }
    }

    groups.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    groups
        .into_iter()
        .map(|(bank, rating, sum, count)| SummaryRow {
            bank,
            rating,
            sentiment_score: sum / count as f64,
        })
        .collect()
}

/// Counts collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub records: usize,
    pub translated: usize,
    pub translation_failed: usize,
    pub unknown_language: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Records that matched no theme
    pub unclassified: usize,
}

impl RunStats {
    pub fn collect(records: &[EnrichedRecord]) -> Self {
        let mut stats = RunStats {
            records: records.len(),
            ..RunStats::default()
        };
        for r in records {
            if r.translation.is_translated() {
                stats.translated += 1;
            }
            if r.translation.is_failed() {
                stats.translation_failed += 1;
            }
            if *r.language() == DetectedLanguage::Unknown {
                stats.unknown_language += 1;
            }
            match r.sentiment_label {
                SentimentLabel::Positive => stats.positive += 1,
                SentimentLabel::Negative => stats.negative += 1,
                SentimentLabel::Neutral => stats.neutral += 1,
            }
            if r.themes.len() == 1 && r.themes[0] == UNCLASSIFIED_THEME {
                stats.unclassified += 1;
            }
        }
        stats
    }
}
