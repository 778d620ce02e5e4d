// Language detection backed by whatlang (trigram models, fully offline).

use super::traits::LanguageDetector;

/// Detector using the `whatlang` crate.
///
/// Returns `None` for text with no detectable script or letters, which the
/// translation stage reports as an unknown language.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        whatlang::detect(text).map(|info| info.lang().code().to_string())
    }
}
