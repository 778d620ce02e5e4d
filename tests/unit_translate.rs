// Unit tests for language detection and translation fallback.
//
// Tests detect_and_translate with stub detectors/translators (no network),
// and GoogleTranslator against a local wiremock server.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reviewscope::translate::detect::WhatlangDetector;
use reviewscope::translate::google::GoogleTranslator;
use reviewscope::translate::traits::{
    DetectedLanguage, DisabledTranslator, LanguageDetector, Translation, Translator,
};
use reviewscope::translate::{detect_and_translate, TranslationPolicy};

const AMHARIC: &str = "መተግበሪያው በጣም ቀርፋፋ ነው";

struct StubDetector(Option<&'static str>);

impl LanguageDetector for StubDetector {
    fn detect(&self, _text: &str) -> Option<String> {
        self.0.map(str::to_string)
    }
}

/// Prefixes the text and counts calls.
#[derive(Default)]
struct CountingTranslator {
    calls: AtomicUsize,
}

#[async_trait]
impl Translator for CountingTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("translated: {text}"))
    }
}

struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str) -> Result<String> {
        anyhow::bail!("network unreachable")
    }
}

fn amharic() -> DetectedLanguage {
    DetectedLanguage::Known("amh".to_string())
}

// ============================================================
// detect_and_translate — fallback semantics
// ============================================================

#[tokio::test]
async fn undetected_language_passes_through_unchanged() {
    let translator = CountingTranslator::default();
    let out = detect_and_translate(
        "ok",
        &StubDetector(None),
        &translator,
        &TranslationPolicy::default(),
    )
    .await;

    assert_eq!(
        out,
        Translation::Passthrough {
            text: "ok".to_string(),
            language: DetectedLanguage::Unknown,
        }
    );
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_source_language_is_not_translated() {
    let translator = CountingTranslator::default();
    let out = detect_and_translate(
        "works well",
        &StubDetector(Some("eng")),
        &translator,
        &TranslationPolicy::default(),
    )
    .await;

    assert_eq!(out.text(), "works well");
    assert!(!out.is_translated());
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn source_language_is_translated() {
    let translator = CountingTranslator::default();
    let out = detect_and_translate(
        AMHARIC,
        &StubDetector(Some("amh")),
        &translator,
        &TranslationPolicy::default(),
    )
    .await;

    assert!(out.is_translated());
    assert_eq!(out.text(), format!("translated: {AMHARIC}"));
    assert_eq!(out.language(), &amharic());
    assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn translation_failure_returns_original() {
    let out = detect_and_translate(
        AMHARIC,
        &StubDetector(Some("amh")),
        &FailingTranslator,
        &TranslationPolicy::default(),
    )
    .await;

    match &out {
        Translation::Failed {
            original,
            language,
            reason,
        } => {
            assert_eq!(original, AMHARIC);
            assert_eq!(language, &amharic());
            assert!(reason.contains("network unreachable"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert_eq!(out.text(), AMHARIC);
}

#[tokio::test]
async fn fallback_is_idempotent() {
    let policy = TranslationPolicy::default();
    let once = detect_and_translate(
        AMHARIC,
        &StubDetector(Some("amh")),
        &FailingTranslator,
        &policy,
    )
    .await;
    let twice = detect_and_translate(
        once.text(),
        &StubDetector(Some("amh")),
        &FailingTranslator,
        &policy,
    )
    .await;
    assert_eq!(twice.text(), AMHARIC);
}

#[tokio::test]
async fn disabled_translator_falls_back() {
    let out = detect_and_translate(
        AMHARIC,
        &StubDetector(Some("amh")),
        &DisabledTranslator,
        &TranslationPolicy::default(),
    )
    .await;
    assert!(out.is_failed());
    assert_eq!(out.text(), AMHARIC);
}

#[tokio::test]
async fn target_language_is_never_translated() {
    let policy = TranslationPolicy {
        source_languages: vec!["eng".to_string(), "amh".to_string()],
        target_language: "eng".to_string(),
    };
    let translator = CountingTranslator::default();
    let out = detect_and_translate("fine", &StubDetector(Some("eng")), &translator, &policy).await;
    assert_eq!(out.text(), "fine");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

// ============================================================
// GoogleTranslator — against a mock endpoint
// ============================================================

async fn mock_endpoint(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("client", "gtx"))
        .and(query_param("tl", "en"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn translator_for(server: &MockServer) -> GoogleTranslator {
    GoogleTranslator::new(&format!("{}/translate_a/single", server.uri()), "en", 0.0)
}

#[tokio::test]
async fn google_translator_joins_segments() {
    let server = mock_endpoint(ResponseTemplate::new(200).set_body_json(json!([
        [
            ["The app is very slow", AMHARIC, null, null, 10]
        ],
        null,
        "am"
    ])))
    .await;

    let translated = translator_for(&server).translate(AMHARIC).await.unwrap();
    assert_eq!(translated, "The app is very slow");
}

#[tokio::test]
async fn google_translator_surfaces_http_errors() {
    let server =
        mock_endpoint(ResponseTemplate::new(429).set_body_string("Too Many Requests")).await;
    let err = translator_for(&server).translate(AMHARIC).await.unwrap_err();
    assert!(err.to_string().contains("429"), "got: {err}");
}

#[tokio::test]
async fn google_translator_rejects_malformed_body() {
    let server = mock_endpoint(ResponseTemplate::new(200).set_body_string("<html>")).await;
    assert!(translator_for(&server).translate(AMHARIC).await.is_err());
}

#[tokio::test]
async fn whatlang_and_google_translate_amharic() {
    let server = mock_endpoint(ResponseTemplate::new(200).set_body_json(json!([
        [["The app is very slow", AMHARIC]]
    ])))
    .await;

    let out = detect_and_translate(
        AMHARIC,
        &WhatlangDetector,
        &translator_for(&server),
        &TranslationPolicy::default(),
    )
    .await;

    assert!(out.is_translated());
    assert_eq!(out.text(), "The app is very slow");
}

#[tokio::test]
async fn whatlang_and_failing_endpoint_keep_original() {
    let server = mock_endpoint(ResponseTemplate::new(500)).await;

    let out = detect_and_translate(
        AMHARIC,
        &WhatlangDetector,
        &translator_for(&server),
        &TranslationPolicy::default(),
    )
    .await;

    assert!(out.is_failed());
    assert_eq!(out.text(), AMHARIC);
}
