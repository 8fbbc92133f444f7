//! Google Translate client using the keyless `translate_a/single` endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use super::TranslationClient;
use crate::config;
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// GoogleTranslatorBuilder
// ---------------------------------------------------------------------------

pub struct GoogleTranslatorBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for GoogleTranslatorBuilder {
    fn default() -> Self {
        Self {
            base_url: config::GOOGLE_TRANSLATE_BASE.to_string(),
            user_agent: config::DEFAULT_USER_AGENT.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl GoogleTranslatorBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<GoogleTranslator> {
        let client = Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .gzip(true)
            .build()?;
        Ok(GoogleTranslator {
            client,
            base_url: self.base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// GoogleTranslator
// ---------------------------------------------------------------------------

pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn builder() -> GoogleTranslatorBuilder {
        GoogleTranslatorBuilder::default()
    }

    pub fn new() -> Result<Self> {
        Self::builder().build()
    }
}

impl TranslationClient for GoogleTranslator {
    fn try_translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let chars = text.chars().count();
        if chars > config::MAX_TRANSLATION_CHARS {
            return Err(DashboardError::InvalidArgument(format!(
                "text has {chars} characters, the limit is {}",
                config::MAX_TRANSLATION_CHARS
            )));
        }

        let url = format!("{}/translate_a/single", self.base_url);
        log::debug!("GET {url} ({source}->{target}, {chars} chars)");
        let body: Value = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text.trim()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        join_segments(&body)
    }
}

/// The response is `[[["segment", "source", ...], ...], null, "en", ...]`;
/// the translation is the concatenation of every segment's first element.
fn join_segments(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| DashboardError::Provider("unexpected translation response".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|s| s.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(DashboardError::Provider("translation response was empty".into()));
    }
    Ok(translated)
}
