// Per-record enrichment stages.
//
// Each stage consumes the previous stage's table and returns a new one;
// a stage finishes for every record before the next stage starts.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::records::models::{EnrichedRecord, Record};
use crate::sentiment::traits::SentimentScorer;
use crate::sentiment::{self, Sentiment};
use crate::text::normalize::normalize;
use crate::themes::tagger::ThemeTagger;
use crate::translate::traits::{LanguageDetector, Translation, Translator};
use crate::translate::{detect_and_translate, TranslationPolicy};

/// A record after translation and normalization.
#[derive(Debug, Clone)]
pub struct PreparedReview {
    pub record: Record,
    pub translation: Translation,
    pub normalized: String,
}

/// A prepared record with its sentiment.
#[derive(Debug, Clone)]
pub struct ScoredReview {
    pub prepared: PreparedReview,
    pub sentiment: Sentiment,
}

/// Stage 1: detect/translate each review, then normalize the result.
pub async fn translate_and_normalize(
    records: Vec<Record>,
    detector: &dyn LanguageDetector,
    translator: &dyn Translator,
    policy: &TranslationPolicy,
    show_progress: bool,
) -> Vec<PreparedReview> {
    let pb = if show_progress {
        ProgressBar::new(records.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) =
        ProgressStyle::default_bar().template("  Translating [{bar:30}] {pos}/{len} ({eta})")
    {
        pb.set_style(style);
    }

    let mut prepared = Vec::with_capacity(records.len());
    for record in records {
        let translation = detect_and_translate(&record.review, detector, translator, policy).await;
        let normalized = normalize(translation.text());
        prepared.push(PreparedReview {
            record,
            translation,
            normalized,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let translated = prepared.iter().filter(|p| p.translation.is_translated()).count();
    let failed = prepared.iter().filter(|p| p.translation.is_failed()).count();
    info!(
        records = prepared.len(),
        translated,
        failed,
        "Translation and normalization complete"
    );

    prepared
}

/// Stage 2: score the normalized text.
pub fn score_sentiment(
    prepared: Vec<PreparedReview>,
    scorer: &dyn SentimentScorer,
) -> Vec<ScoredReview> {
    let scored: Vec<ScoredReview> = prepared
        .into_iter()
        .map(|p| {
            let sentiment = sentiment::analyze(scorer, &p.normalized);
            ScoredReview {
                prepared: p,
                sentiment,
            }
        })
        .collect();

    info!(records = scored.len(), "Sentiment scoring complete");
    scored
}

/// Stage 3: tag themes and assemble the enriched records.
pub fn tag_themes(scored: Vec<ScoredReview>, tagger: &ThemeTagger) -> Vec<EnrichedRecord> {
    let enriched: Vec<EnrichedRecord> = scored
        .into_iter()
        .map(|s| {
            let themes = tagger.tag(&s.prepared.normalized);
            EnrichedRecord {
                record: s.prepared.record,
                translation: s.prepared.translation,
                normalized: s.prepared.normalized,
                sentiment_label: s.sentiment.label,
                sentiment_score: s.sentiment.score,
                themes,
            }
        })
        .collect();

    info!(records = enriched.len(), "Theme tagging complete");
    enriched
}
