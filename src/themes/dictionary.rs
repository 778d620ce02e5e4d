// ThemeDictionary — the ordered theme → keyword phrases mapping.
//
// Declaration order matters: the tagger emits themes in this order, so it is
// stored as a Vec rather than a map. The default mirrors the categories the
// reporting dashboards are built around; a JSON file can replace it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single theme and the keyword phrases that indicate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered collection of themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeDictionary {
    themes: Vec<Theme>,
}

impl ThemeDictionary {
    /// Build a dictionary, rejecting empty theme names and empty keywords
    /// (an empty pattern would match every review).
    pub fn new(themes: Vec<Theme>) -> Result<Self> {
        for theme in &themes {
            if theme.name.trim().is_empty() {
                anyhow::bail!("Theme dictionary contains a theme with an empty name");
            }
            if theme.keywords.iter().any(|kw| kw.trim().is_empty()) {
                anyhow::bail!("Theme '{}' contains an empty keyword", theme.name);
            }
        }
        Ok(Self { themes })
    }

    /// Load a dictionary from a JSON file shaped like
    /// `[{"name": "Access Issues", "keywords": ["login", "otp"]}, ...]`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid theme file {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let themes: Vec<Theme> = serde_json::from_str(raw).context("Failed to parse themes")?;
        Self::new(themes)
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeDictionary {
    fn default() -> Self {
        let theme = |name: &str, keywords: &[&str]| Theme {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };

        Self {
            themes: vec![
                theme(
                    "Access Issues",
                    &["login", "otp", "error", "fail", "password", "cant access"],
                ),
                theme(
                    "Transaction Performance",
                    &["transfer", "slow", "delay", "payment", "transaction", "hanged"],
                ),
                theme(
                    "UI/UX",
                    &["ui", "interface", "design", "app", "easy", "user friendly"],
                ),
                theme(
                    "Customer Support",
                    &["support", "help", "service", "customer", "call"],
                ),
                theme("Features", &["update", "feature", "add", "option", "version"]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let dict = ThemeDictionary::default();
        let names: Vec<&str> = dict.themes().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Access Issues",
                "Transaction Performance",
                "UI/UX",
                "Customer Support",
                "Features"
            ]
        );
    }

    #[test]
    fn test_rejects_empty_keyword() {
        let result = ThemeDictionary::new(vec![Theme {
            name: "Broken".to_string(),
            keywords: vec!["ok".to_string(), " ".to_string()],
        }]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_keeps_order() {
        let dict = ThemeDictionary::from_json_str(
            r#"[{"name": "Zeta", "keywords": ["z"]}, {"name": "Alpha", "keywords": ["a"]}]"#,
        )
        .unwrap();
        assert_eq!(dict.themes()[0].name, "Zeta");
        assert_eq!(dict.themes()[1].name, "Alpha");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ThemeDictionary::from_json_str("{not json").is_err());
    }
}
