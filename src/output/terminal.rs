// Colored terminal output for run summaries, grouped sentiment and keywords.
//
// main.rs delegates here after each command so the library stays free of
// printing logic.

use colored::Colorize;

use crate::pipeline::summary::RunStats;
use crate::records::clean::CleanReport;
use crate::records::models::SummaryRow;
use crate::sentiment::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use crate::topics::report::KeywordReport;

/// Display the counts collected during an `analyze` run.
pub fn display_run_stats(stats: &RunStats) {
    println!(
        "\n{}",
        format!("=== Run Summary ({} reviews) ===", stats.records).bold()
    );
    println!(
        "  Sentiment: {} positive, {} negative, {} neutral",
        stats.positive.to_string().green(),
        stats.negative.to_string().red(),
        stats.neutral.to_string().dimmed()
    );
    println!(
        "  Translation: {} translated, {} fell back to original, {} unknown language",
        stats.translated, stats.translation_failed, stats.unknown_language
    );
    println!("  Unclassified (no theme): {}", stats.unclassified);
}

/// Display the mean sentiment per (entity, rating).
pub fn display_summary(rows: &[SummaryRow]) {
    if rows.is_empty() {
        println!("\nNo rated reviews to summarize.");
        return;
    }

    println!("\n{}", "=== Mean Sentiment by Entity and Rating ===".bold());
    println!();
    println!(
        "  {:<32} {:>6}  {:>9}",
        "Entity".dimmed(),
        "Rating".dimmed(),
        "Sentiment".dimmed()
    );
    println!("  {}", "-".repeat(51).dimmed());

    for row in rows {
        let score = format!("{:>9.3}", row.sentiment_score);
        let colored_score = if row.sentiment_score >= POSITIVE_THRESHOLD {
            score.green()
        } else if row.sentiment_score <= NEGATIVE_THRESHOLD {
            score.red()
        } else {
            score.normal()
        };
        println!("  {:<32} {:>6}  {}", row.bank, row.rating, colored_score);
    }
}

/// Display the keyword report, one block per entity.
pub fn display_keywords(report: &KeywordReport) {
    if report.is_empty() {
        println!("\nNo keywords extracted (corpus had no usable terms).");
        return;
    }

    println!("\n{}", "=== Top Keywords by Entity ===".bold());

    for entity in &report.entities {
        println!();
        println!("  {}", entity.entity.bold());
        for (i, term) in entity.terms.iter().enumerate() {
            println!(
                "    {:>2}. {:<32} {}",
                i + 1,
                term.term,
                format!("{:.4}", term.weight).dimmed()
            );
        }
    }
    println!();
}

/// Display what the cleaning stage kept and dropped.
pub fn display_clean_report(report: &CleanReport) {
    if report.input_rows == 0 {
        println!("Scraped export is empty. No processing done.");
        return;
    }

    println!(
        "Kept {} of {} rows ({} empty, {} duplicates removed)",
        report.kept.to_string().bold(),
        report.input_rows,
        report.dropped_empty,
        report.dropped_duplicate
    );
    if report.unparsed_dates > 0 {
        println!(
            "  {} {} dates were not recognized and were kept as-is",
            "Warning:".yellow(),
            report.unparsed_dates
        );
    }
}
