// Language detection and translation — trait-based, swappable providers.
//
// LanguageDetector and Translator define the interfaces. The pipeline only
// ever sees a Translation outcome per record, so a provider failure turns
// into a fallback to the original text instead of aborting the batch.

pub mod detect;
pub mod google;
pub mod rate_limiter;
pub mod traits;

use tracing::debug;

use crate::output::truncate_chars;
use traits::{DetectedLanguage, LanguageDetector, Translation, Translator};

/// Which languages get translated, and into what.
#[derive(Debug, Clone)]
pub struct TranslationPolicy {
    /// ISO 639-3 codes worth translating (e.g. "amh")
    pub source_languages: Vec<String>,
    /// ISO 639-3 code of the language the rest of the pipeline expects
    pub target_language: String,
}

impl Default for TranslationPolicy {
    fn default() -> Self {
        Self {
            source_languages: vec!["amh".to_string()],
            target_language: "eng".to_string(),
        }
    }
}

impl TranslationPolicy {
    /// Whether text detected as `code` should be sent to the translator.
    pub fn wants(&self, code: &str) -> bool {
        code != self.target_language && self.source_languages.iter().any(|s| s == code)
    }
}

/// Detect the language of `text` and translate it if the policy asks for it.
///
/// One attempt, no retries. Every failure is captured in the returned
/// outcome; nothing propagates to the caller.
pub async fn detect_and_translate(
    text: &str,
    detector: &dyn LanguageDetector,
    translator: &dyn Translator,
    policy: &TranslationPolicy,
) -> Translation {
    let language = match detector.detect(text) {
        Some(code) => DetectedLanguage::Known(code),
        None => {
            return Translation::Passthrough {
                text: text.to_string(),
                language: DetectedLanguage::Unknown,
            }
        }
    };

    if !policy.wants(language.code()) {
        return Translation::Passthrough {
            text: text.to_string(),
            language,
        };
    }

    match translator.translate(text).await {
        Ok(translated) => Translation::Translated {
            text: translated,
            original: text.to_string(),
            language,
        },
        Err(e) => {
            debug!(
                error = %e,
                language = language.code(),
                text_preview = %truncate_chars(text, 50),
                "Translation failed, keeping original text"
            );
            Translation::Failed {
                original: text.to_string(),
                language,
                reason: e.to_string(),
            }
        }
    }
}
