// HTTP client for the OpenRouter chat-completions API

use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

use super::error::ChatError;
use super::types::{ChatRequest, ChatResponse};

const OPENROUTER_BASE_URL: &str = "https://openrouter.ai";
const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 15;

// Static identification headers OpenRouter uses for app attribution.
const REFERER: &str = "https://github.com/billy-assistant/billy";
const APP_TITLE: &str = "Bill Reminder AI";

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client against the production endpoint.
    pub fn new() -> Result<Self, ChatError> {
        Self::with_base_url(OPENROUTER_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL; tests point this at a
    /// local mock server.
    pub fn with_base_url(base_url: String) -> Result<Self, ChatError> {
        let mut headers = HeaderMap::new();
        headers.insert("HTTP-Referer", HeaderValue::from_static(REFERER));
        headers.insert("X-Title", HeaderValue::from_static(APP_TITLE));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .map_err(|e| ChatError::Unexpected(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Issue one completion request and extract the reply text.
    ///
    /// One call is one attempt; the retry policy lives in the caller.
    pub async fn complete(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<String, ChatError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), COMPLETIONS_PATH);

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending completion request"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Network(format!("status {}: {}", status, body)));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        match body.text() {
            Some(text) => Ok(text.to_string()),
            None => Err(ChatError::MalformedResponse(
                "response has no choices".to_string(),
            )),
        }
    }
}
