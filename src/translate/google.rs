// Google Translate implementation (public `client=gtx` endpoint).
//
// The endpoint needs no API key. It answers with a nested JSON array whose
// first element is a list of segments; each segment's first element is a
// translated chunk of the input. We join the chunks back together.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::rate_limiter::RateLimiter;
use super::traits::Translator;
use crate::output::truncate_chars;

pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Translator backed by the public Google Translate endpoint.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    /// Target language code as the endpoint expects it (e.g. "en")
    target: String,
    rate_limiter: RateLimiter,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str, target: &str, requests_per_second: f64) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            target: target.to_string(),
            rate_limiter: RateLimiter::new(requests_per_second),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        self.rate_limiter.acquire().await;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to call translation endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translation endpoint returned {}: {}", status, body);
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        let translated = extract_translation(&body)?;

        debug!(
            source_preview = %truncate_chars(text, 50),
            translated_preview = %truncate_chars(&translated, 50),
            "Translated text"
        );

        Ok(translated)
    }
}

/// Join the translated segments of a gtx response.
pub fn extract_translation(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .context("Translation response has no segment list")?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        anyhow::bail!("Translation response contained no text");
    }

    Ok(translated)
}
