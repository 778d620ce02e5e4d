use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::translate::google::DEFAULT_TRANSLATE_URL;
use crate::translate::TranslationPolicy;

/// Which translation backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslatorBackend {
    /// Public Google Translate endpoint (default); needs network access
    Google,
    /// No translation; records in source languages keep their original text
    Disabled,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub translator_backend: TranslatorBackend,
    /// Translation endpoint (REVIEWSCOPE_TRANSLATE_URL)
    pub translate_url: String,
    /// Max translation requests per second; 0 disables the limit
    pub translate_qps: f64,
    /// Target language code sent to the translator (e.g. "en")
    pub translate_target: String,
    /// Which detected languages get translated, and the target to compare against
    pub policy: TranslationPolicy,
    /// Optional JSON file replacing the built-in theme dictionary
    pub themes_path: Option<PathBuf>,
    /// Terms reported per entity in the keyword report
    pub top_keywords: usize,
    /// Vocabulary cap for the TF-IDF model
    pub max_features: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let translator_backend = match env::var("REVIEWSCOPE_TRANSLATOR").as_deref() {
            Ok("none") | Ok("disabled") => TranslatorBackend::Disabled,
            Ok("google") | Err(_) => TranslatorBackend::Google,
            Ok(other) => anyhow::bail!(
                "Unknown REVIEWSCOPE_TRANSLATOR '{other}' (expected 'google' or 'none')"
            ),
        };

        let defaults = TranslationPolicy::default();
        let source_languages = env::var("REVIEWSCOPE_SOURCE_LANGS")
            .map(|v| parse_list(&v))
            .unwrap_or(defaults.source_languages);
        let target_language =
            env::var("REVIEWSCOPE_TARGET_LANG").unwrap_or(defaults.target_language);

        Ok(Self {
            translator_backend,
            translate_url: env::var("REVIEWSCOPE_TRANSLATE_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_URL.to_string()),
            translate_qps: parse_var("REVIEWSCOPE_TRANSLATE_QPS", 5.0)?,
            translate_target: env::var("REVIEWSCOPE_TRANSLATE_TARGET")
                .unwrap_or_else(|_| "en".to_string()),
            policy: TranslationPolicy {
                source_languages,
                target_language,
            },
            themes_path: env::var("REVIEWSCOPE_THEMES").ok().map(PathBuf::from),
            top_keywords: parse_var("REVIEWSCOPE_TOP_KEYWORDS", 10)?,
            max_features: parse_var("REVIEWSCOPE_MAX_FEATURES", 1000)?,
        })
    }
}

/// Origin tag for cleaned rows (REVIEWSCOPE_SOURCE_TAG).
///
/// Read on its own by `clean`, which needs none of the translation or
/// keyword settings and must not fail on them.
pub fn source_tag() -> String {
    env::var("REVIEWSCOPE_SOURCE_TAG").unwrap_or_else(|_| "Google Play".to_string())
}

/// Read a numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Split a comma-separated list, dropping blanks.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
