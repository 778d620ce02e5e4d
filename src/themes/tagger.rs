// Keyword → theme tagging with whole-word matching.
//
// Each keyword compiles to `(?i)\b<keyword>\b`, so "app" matches "the app
// works" but not "happy", and a multi-word keyword like "cant access" only
// matches that literal phrase.

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::dictionary::ThemeDictionary;
use super::UNCLASSIFIED_THEME;

/// A theme with its keyword patterns compiled.
struct CompiledTheme {
    name: String,
    patterns: Vec<Regex>,
}

/// Assigns theme labels to normalized review text.
pub struct ThemeTagger {
    themes: Vec<CompiledTheme>,
}

impl ThemeTagger {
    /// Compile every keyword in `dictionary`.
    pub fn new(dictionary: &ThemeDictionary) -> Result<Self> {
        let themes = dictionary
            .themes()
            .iter()
            .map(|theme| {
                let patterns = theme
                    .keywords
                    .iter()
                    .map(|kw| keyword_pattern(kw))
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledTheme {
                    name: theme.name.clone(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { themes })
    }

    /// Themes present in `text`, in dictionary order, each at most once.
    /// Returns `["Other"]` when nothing matches.
    pub fn tag(&self, text: &str) -> Vec<String> {
        let matched: Vec<String> = self
            .themes
            .iter()
            .filter(|theme| theme.patterns.iter().any(|p| p.is_match(text)))
            .map(|theme| theme.name.clone())
            .collect();

        if matched.is_empty() {
            vec![UNCLASSIFIED_THEME.to_string()]
        } else {
            matched
        }
    }
}

fn keyword_pattern(keyword: &str) -> Result<Regex> {
    let pattern = format!(r"(?i)\b{}\b", regex_lite::escape(keyword.trim()));
    Regex::new(&pattern).with_context(|| format!("Invalid theme keyword '{keyword}'"))
}
