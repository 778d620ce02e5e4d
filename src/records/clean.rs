// Cleaning a raw scraped export into the pipeline's input table.
//
// The scraper writes one row per review with display-style headers
// ("Review Text", "App Name", ...) and full timestamps. Cleaning renames
// the columns, tags every row with its origin, drops empty and duplicate
// reviews and reduces timestamps to calendar dates.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::io::write_csv;

/// Column order of the cleaned table.
pub const CLEANED_COLUMNS: &[&str] = &["review", "rating", "date", "bank", "source"];

/// A row of the raw scraped export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReview {
    #[serde(rename = "Review Text", default)]
    pub review: Option<String>,
    #[serde(rename = "Rating", default, deserialize_with = "csv::invalid_option")]
    pub rating: Option<f64>,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "App Name", default)]
    pub bank: Option<String>,
}

/// A row of the cleaned table, ready for `analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedReview {
    pub review: String,
    pub rating: Option<f64>,
    pub date: String,
    pub bank: String,
    pub source: String,
}

/// What cleaning did to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub input_rows: usize,
    pub kept: usize,
    pub dropped_empty: usize,
    pub dropped_duplicate: usize,
    /// Dates that matched no known format and were kept verbatim
    pub unparsed_dates: usize,
}

impl CleanReport {
    pub fn dropped(&self) -> usize {
        self.dropped_empty + self.dropped_duplicate
    }
}

/// Clean raw rows. Duplicates are judged on (review, bank); the first
/// occurrence wins.
pub fn clean_reviews(rows: Vec<RawReview>, source_tag: &str) -> (Vec<CleanedReview>, CleanReport) {
    let mut report = CleanReport {
        input_rows: rows.len(),
        ..CleanReport::default()
    };
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut cleaned = Vec::with_capacity(rows.len());

    for row in rows {
        let review = match row.review {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                report.dropped_empty += 1;
                continue;
            }
        };
        let bank = row.bank.unwrap_or_default();

        if !seen.insert((review.clone(), bank.clone())) {
            report.dropped_duplicate += 1;
            continue;
        }

        let raw_date = row.date.unwrap_or_default();
        let date = match normalize_date(&raw_date) {
            Some(date) => date,
            None => {
                if !raw_date.is_empty() {
                    report.unparsed_dates += 1;
                    warn!(date = %raw_date, "Unrecognized date format, keeping as-is");
                }
                raw_date
            }
        };

        cleaned.push(CleanedReview {
            review,
            rating: row.rating,
            date,
            bank,
            source: source_tag.to_string(),
        });
    }

    report.kept = cleaned.len();
    (cleaned, report)
}

/// Reduce a timestamp or date to `YYYY-MM-DD`.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date().format("%Y-%m-%d").to_string());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Read a raw export from `input`, clean it and write it to `output`.
///
/// An empty export writes nothing.
pub fn clean_file(input: &Path, output: &Path, source_tag: &str) -> Result<CleanReport> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("Failed to open scraped export {}", input.display()))?;
    let rows = reader
        .deserialize::<RawReview>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Malformed row in {}", input.display()))?;

    if rows.is_empty() {
        info!(path = %input.display(), "Scraped export is empty, nothing to clean");
        return Ok(CleanReport::default());
    }

    let (cleaned, report) = clean_reviews(rows, source_tag);
    if report.dropped() > 0 {
        info!(
            empty = report.dropped_empty,
            duplicates = report.dropped_duplicate,
            "Removed duplicate/empty rows"
        );
    }

    write_csv(output, CLEANED_COLUMNS, &cleaned)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(review: Option<&str>, bank: &str, date: &str) -> RawReview {
        RawReview {
            review: review.map(str::to_string),
            rating: Some(4.0),
            date: Some(date.to_string()),
            bank: Some(bank.to_string()),
        }
    }

    #[test]
    fn test_normalize_date_formats() {
        assert_eq!(normalize_date("2024-11-05 13:45:12").as_deref(), Some("2024-11-05"));
        assert_eq!(normalize_date("2024-11-05T13:45:12").as_deref(), Some("2024-11-05"));
        assert_eq!(
            normalize_date("2024-11-05T23:45:12+03:00").as_deref(),
            Some("2024-11-05")
        );
        assert_eq!(normalize_date("2024-11-05").as_deref(), Some("2024-11-05"));
        assert_eq!(normalize_date("last tuesday"), None);
        assert_eq!(normalize_date(""), None);
    }

    #[test]
    fn test_drops_empty_and_duplicates() {
        let rows = vec![
            raw(Some("Great app"), "CBE", "2024-01-01 10:00:00"),
            raw(Some("Great app"), "CBE", "2024-01-02 10:00:00"),
            raw(Some("Great app"), "Dashen", "2024-01-02 10:00:00"),
            raw(None, "CBE", "2024-01-03 10:00:00"),
            raw(Some("   "), "BOA", "2024-01-03 10:00:00"),
        ];
        let (cleaned, report) = clean_reviews(rows, "Google Play");

        assert_eq!(cleaned.len(), 2);
        assert_eq!(report.input_rows, 5);
        assert_eq!(report.dropped_duplicate, 1);
        assert_eq!(report.dropped_empty, 2);
        assert_eq!(report.kept, 2);
        assert_eq!(cleaned[0].date, "2024-01-01");
        assert_eq!(cleaned[1].bank, "Dashen");
        assert!(cleaned.iter().all(|r| r.source == "Google Play"));
    }

    #[test]
    fn test_unparsed_date_kept_verbatim() {
        let (cleaned, report) = clean_reviews(vec![raw(Some("ok"), "CBE", "soon")], "Google Play");
        assert_eq!(cleaned[0].date, "soon");
        assert_eq!(report.unparsed_dates, 1);
    }
}
