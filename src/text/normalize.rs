// Review text normalization.
//
// Every scorer, tagger and the keyword extractor read the normalized form,
// so the rules here define what "a word" means for the rest of the pipeline:
// lowercase ASCII letters and digits separated by single spaces.

/// Normalize a review for analysis.
///
/// Lowercases, replaces every character that isn't an ASCII letter, ASCII
/// digit or whitespace with a space, collapses whitespace runs and trims.
/// Never fails; an empty or punctuation-only input yields an empty string.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an optional value, treating a missing value as empty text.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(
            normalize("I cant access my account, login error!"),
            "i cant access my account login error"
        );
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Great\t\tapp \n\n works  "), "great app works");
    }

    #[test]
    fn test_normalize_strips_non_ascii() {
        // Untranslated Ethiopic script has no ASCII letters left over
        assert_eq!(normalize("ሰላም"), "");
        assert_eq!(normalize("café au lait"), "caf au lait");
    }

    #[test]
    fn test_normalize_missing_is_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("OK!")), "ok");
    }
}
