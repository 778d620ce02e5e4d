// The enrichment pipeline.
//
// Load → translate + normalize → score sentiment → tag themes → write the
// enriched and summary tables → extract keywords. Stages run one after the
// other over the whole table; nothing runs concurrently.

pub mod enrich;
pub mod summary;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::records::io::{read_records, write_csv, write_json, ENRICHED_COLUMNS, SUMMARY_COLUMNS};
use crate::records::models::{EnrichedRecord, EnrichedRow, Record, SummaryRow};
use crate::sentiment::traits::SentimentScorer;
use crate::themes::tagger::ThemeTagger;
use crate::topics::report::KeywordReport;
use crate::topics::traits::KeywordExtractor;
use crate::translate::traits::{LanguageDetector, Translator};
use crate::translate::TranslationPolicy;
use summary::{summarize, RunStats};

/// Where a run writes its artifacts.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub enriched: PathBuf,
    pub summary: PathBuf,
    /// Optional JSON copy of the keyword report
    pub keywords: Option<PathBuf>,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub enriched: Vec<EnrichedRecord>,
    pub summary: Vec<SummaryRow>,
    pub keywords: KeywordReport,
    pub stats: RunStats,
}

/// The collaborators a run needs. All are injected so tests can swap in
/// offline detectors, failing translators or custom dictionaries.
pub struct Pipeline<'a> {
    pub detector: &'a dyn LanguageDetector,
    pub translator: &'a dyn Translator,
    pub policy: TranslationPolicy,
    pub scorer: &'a dyn SentimentScorer,
    pub tagger: &'a ThemeTagger,
    pub extractor: &'a dyn KeywordExtractor,
    /// Draw a progress bar during translation
    pub show_progress: bool,
}

impl Pipeline<'_> {
    /// Run the per-record stages over an in-memory table.
    pub async fn enrich(&self, records: Vec<Record>) -> Vec<EnrichedRecord> {
        let prepared = enrich::translate_and_normalize(
            records,
            self.detector,
            self.translator,
            &self.policy,
            self.show_progress,
        )
        .await;
        let scored = enrich::score_sentiment(prepared, self.scorer);
        enrich::tag_themes(scored, self.tagger)
    }

    /// Keyword report over the fully tagged table.
    pub fn extract_keywords(&self, records: &[EnrichedRecord]) -> KeywordReport {
        let corpus: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.record.bank.as_str(), r.normalized.as_str()))
            .collect();
        self.extractor.extract(&corpus)
    }

    /// Full run: read `input`, enrich, write both tables, then extract keywords.
    ///
    /// Only a failure to read the input (or to write an output) aborts the
    /// run; per-record problems are absorbed by the stages.
    pub async fn run(&self, input: &Path, outputs: &OutputPaths) -> Result<PipelineOutput> {
        let records = read_records(input)?;

        let enriched = self.enrich(records).await;
        let summary = summarize(&enriched);

        let rows: Vec<EnrichedRow> = enriched.iter().map(EnrichedRecord::to_row).collect();
        write_csv(&outputs.enriched, ENRICHED_COLUMNS, &rows)?;
        write_csv(&outputs.summary, SUMMARY_COLUMNS, &summary)?;

        let keywords = self.extract_keywords(&enriched);
        if let Some(path) = &outputs.keywords {
            write_json(path, &keywords)?;
        }

        let stats = RunStats::collect(&enriched);
        info!(
            records = stats.records,
            groups = summary.len(),
            keyword_entities = keywords.len(),
            "Pipeline finished"
        );

        Ok(PipelineOutput {
            enriched,
            summary,
            keywords,
            stats,
        })
    }
}
