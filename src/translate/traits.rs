// Detector and translator traits, plus the per-record outcome type.

use anyhow::Result;
use async_trait::async_trait;

/// The language a record was detected as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectedLanguage {
    /// ISO 639-3 code reported by the detector
    Known(String),
    /// Detection failed (text too short, no letters, ambiguous)
    Unknown,
}

impl DetectedLanguage {
    pub fn code(&self) -> &str {
        match self {
            DetectedLanguage::Known(code) => code,
            DetectedLanguage::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// What happened to a single record's text in the translation stage.
///
/// The text used downstream is always available through [`Translation::text`],
/// whichever variant this is.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// Not a language we translate (or detection failed); text untouched.
    Passthrough {
        text: String,
        language: DetectedLanguage,
    },
    /// The translator succeeded.
    Translated {
        text: String,
        original: String,
        language: DetectedLanguage,
    },
    /// The translator was called and failed; the original text is kept.
    Failed {
        original: String,
        language: DetectedLanguage,
        reason: String,
    },
}

impl Translation {
    /// The text the rest of the pipeline should analyze.
    pub fn text(&self) -> &str {
        match self {
            Translation::Passthrough { text, .. } => text,
            Translation::Translated { text, .. } => text,
            Translation::Failed { original, .. } => original,
        }
    }

    pub fn language(&self) -> &DetectedLanguage {
        match self {
            Translation::Passthrough { language, .. }
            | Translation::Translated { language, .. }
            | Translation::Failed { language, .. } => language,
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self, Translation::Translated { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Translation::Failed { .. })
    }
}

/// Trait for detecting the language of a piece of text.
pub trait LanguageDetector: Send + Sync {
    /// Return an ISO 639-3 code, or `None` when detection fails.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Trait for translating text into the configured target language.
/// Async because real providers are HTTP APIs.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String>;
}

/// Translator used when translation is switched off (`--no-translate` or
/// `REVIEWSCOPE_TRANSLATOR=none`). Always fails, so records that would
/// have been translated are reported as fallbacks rather than silently
/// looking translated.
pub struct DisabledTranslator;

#[async_trait]
impl Translator for DisabledTranslator {
    async fn translate(&self, _text: &str) -> Result<String> {
        anyhow::bail!("translation is disabled")
    }
}
