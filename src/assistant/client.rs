//! HTTP client for OpenAI-compatible chat-completion endpoints
//!
//! Talks to OpenRouter by default. One request per call, no streaming and no
//! retries.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{Assistant, CompletionRequest};
use crate::config::settings::API_KEY_ENV;
use crate::config::AssistantSettings;
use crate::error::{FinError, FinResult};

/// Reply used when the service answers without any text
pub const EMPTY_REPLY: &str = "No response from AI";

#[derive(Serialize)]
struct Msg<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<Msg<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

/// Chat-completion client configured from settings
pub struct ChatClient {
    http: reqwest::Client,
    settings: AssistantSettings,
    api_url: String,
    api_key: Option<String>,
}

impl ChatClient {
    /// Build a client from settings and the environment
    ///
    /// A missing API key is only reported when a request is actually sent,
    /// so shorthand commands keep working without one.
    pub fn from_settings(settings: &AssistantSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: settings.effective_api_url(),
            api_key: settings.api_key().ok(),
            settings: settings.clone(),
        }
    }

    pub fn new(settings: AssistantSettings, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: settings.effective_api_url(),
            settings,
            api_key: Some(api_key.into()),
        }
    }

    fn headers(&self) -> FinResult<HeaderMap> {
        let invalid = |name: &str| FinError::Config(format!("Invalid {} header value", name));
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FinError::Config(format!("{} is not set", API_KEY_ENV)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|_| invalid("Authorization"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "http-referer",
            HeaderValue::from_str(&self.settings.referer).map_err(|_| invalid("HTTP-Referer"))?,
        );
        headers.insert(
            "x-title",
            HeaderValue::from_str(&self.settings.title).map_err(|_| invalid("X-Title"))?,
        );
        Ok(headers)
    }

    fn body<'a>(&'a self, request: &'a CompletionRequest) -> ChatCompletionBody<'a> {
        let max_tokens = request.tuned.then_some(self.settings.max_tokens);
        let temperature = request.tuned.then_some(self.settings.temperature);

        ChatCompletionBody {
            model: &self.settings.model,
            messages: vec![
                Msg {
                    role: "system",
                    content: &request.system,
                },
                Msg {
                    role: "user",
                    content: &request.user,
                },
            ],
            max_tokens,
            temperature,
            stream: false,
        }
    }
}

impl Assistant for ChatClient {
    async fn complete(&self, request: &CompletionRequest) -> FinResult<String> {
        debug!(url = %self.api_url, model = %self.settings.model, "sending chat completion");

        let resp = self
            .http
            .post(&self.api_url)
            .headers(self.headers()?)
            .json(&self.body(request))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(%status, "chat completion failed");
            return Err(FinError::Assistant(format!("{}: {}", status, text)));
        }

        let data: Value = resp.json().await?;
        Ok(extract_reply(&data))
    }
}

/// Pull the reply text out of a chat-completion response
///
/// Prefers `choices[0].message.content`, then a top-level `output` field.
pub fn extract_reply(data: &Value) -> String {
    data.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .or_else(|| data.get("output").and_then(Value::as_str))
        .filter(|text| !text.is_empty())
        .unwrap_or(EMPTY_REPLY)
        .to_string()
}
