// Theme tagging — keyword dictionary matching over normalized review text.

pub mod dictionary;
pub mod tagger;

/// Label assigned when no theme keyword matches.
pub const UNCLASSIFIED_THEME: &str = "Other";

/// Separator used when a record's themes are written as a single column.
pub const THEME_SEPARATOR: &str = ", ";

/// Join theme labels for tabular output.
pub fn join_themes(themes: &[String]) -> String {
    themes.join(THEME_SEPARATOR)
}
