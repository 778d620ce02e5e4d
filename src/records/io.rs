// CSV input and output.
//
// Output tables are written to a temporary sibling file and renamed into
// place only after every row has been written, so an interrupted run never
// leaves a half-written table behind.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::models::Record;

/// Column order of the enriched output table.
pub const ENRICHED_COLUMNS: &[&str] = &[
    "review_id",
    "review_text",
    "sentiment_label",
    "sentiment_score",
    "identified_themes",
];

/// Column order of the summary output table.
pub const SUMMARY_COLUMNS: &[&str] = &["bank", "rating", "sentiment_score"];

/// One row of the input table. Every column is optional; unknown columns
/// are ignored and a non-numeric rating reads as missing.
#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(default)]
    review_id: Option<String>,
    #[serde(default)]
    review: Option<String>,
    #[serde(default)]
    bank: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rating: Option<f64>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

/// Load the input table.
///
/// A missing file is fatal. Rows without a `review_id` get their zero-based
/// row position as identifier; a repeated identifier is made unique with a
/// `#<row>` suffix, appended again while the result is still taken.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open input table {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, row) in reader.deserialize::<InputRow>().enumerate() {
        let row = row.with_context(|| format!("Malformed row {} in {}", i + 1, path.display()))?;
        rows.push(row);
    }

    let records = assign_ids(rows);
    info!(rows = records.len(), path = %path.display(), "Loaded input table");
    Ok(records)
}

fn assign_ids(rows: Vec<InputRow>) -> Vec<Record> {
    let mut seen: HashSet<String> = HashSet::new();

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut review_id = row
                .review_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| i.to_string());

            if !seen.insert(review_id.clone()) {
                // The suffixed id may itself be taken by an earlier row
                let mut unique = format!("{review_id}#{i}");
                while !seen.insert(unique.clone()) {
                    unique.push_str(&format!("#{i}"));
                }
                warn!(review_id = %review_id, replacement = %unique, "Duplicate review_id");
                review_id = unique;
            }

            Record {
                review_id,
                review: row.review.unwrap_or_default(),
                bank: row.bank.unwrap_or_default(),
                rating: row.rating,
                date: row.date.unwrap_or_default(),
                source: row.source.unwrap_or_default(),
            }
        })
        .collect()
}

/// Write `rows` under `headers`, replacing `path` atomically.
pub fn write_csv<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let tmp = temp_path(path);
    ensure_parent(path)?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)
            .with_context(|| format!("Failed to create {}", tmp.display()))?;
        writer.write_record(headers)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
    }

    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to move output into place at {}", path.display()))?;
    info!(rows = rows.len(), path = %path.display(), "Wrote table");
    Ok(())
}

/// Write `value` as pretty JSON, replacing `path` atomically.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let tmp = temp_path(path);
    ensure_parent(path)?;

    let json = serde_json::to_string_pretty(value)?;
    fs::write(&tmp, json).with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to move output into place at {}", path.display()))?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".tmp");
    path.with_file_name(name)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: Option<&str>, review: &str) -> InputRow {
        InputRow {
            review_id: id.map(str::to_string),
            review: Some(review.to_string()),
            bank: Some("CBE".to_string()),
            rating: Some(5.0),
            date: None,
            source: None,
        }
    }

    #[test]
    fn test_synthetic_ids_are_row_positions() {
        let records = assign_ids(vec![row(None, "a"), row(None, "b"), row(Some(" "), "c")]);
        let ids: Vec<&str> = records.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_duplicate_ids_made_unique() {
        let records = assign_ids(vec![row(Some("r1"), "a"), row(Some("r1"), "b")]);
        assert_eq!(records[0].review_id, "r1");
        assert_eq!(records[1].review_id, "r1#1");
    }

    #[test]
    fn test_suffixed_id_skips_ids_already_taken() {
        let records = assign_ids(vec![
            row(Some("a"), "x"),
            row(Some("a#2"), "y"),
            row(Some("a"), "z"),
        ]);
        let ids: Vec<&str> = records.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a#2", "a#2#2"]);
    }

    #[test]
    fn test_explicit_id_matching_row_position_stays_unique() {
        let records = assign_ids(vec![row(Some("1"), "x"), row(None, "y")]);
        let ids: HashSet<&str> = records.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(records[1].review_id, "1#1");
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("out/summary.csv")),
            PathBuf::from("out/summary.csv.tmp")
        );
    }
}
