//! OpenAI-compatible chat completions client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::OpenAiConfig;
use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

/// Instructions sent with every request. Describes the `HealthAnalysis` shape.
pub const SYSTEM_PROMPT: &str = r#"Analyze conversations for health-related content and return JSON in this exact format:
{
  "isHealthRelated": boolean,
  "hasEnoughInfo": boolean,
  "errorMessage": string | null,
  "analysis": {
    "background": string | null,
    "concerns": string | null,
    "keyQuestions": string | null
  }
}

Rules:
- Set isHealthRelated to true only if the text contains discussions about physical health, mental health, medical conditions, or healthcare
- Set hasEnoughInfo to true only if there's sufficient context to provide meaningful analysis in all three categories
- If not health-related, provide appropriate errorMessage and set analysis fields to null
- If insufficient info, provide appropriate errorMessage and set analysis fields to null"#;

/// Provider of raw model output for a piece of text.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TextAnalysisProvider: Send + Sync {
    /// Send `text` for analysis and return the model's raw reply.
    ///
    /// A reply without content is returned as an empty string.
    async fn complete(&self, text: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

/// Client for an OpenAI-compatible `chat/completions` endpoint.
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Build the HTTP client with the configured request timeout.
    pub fn new(config: OpenAiConfig) -> AppResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn request_body<'a>(&'a self, text: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Analyze this text: {}", text),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
impl TextAnalysisProvider for OpenAiClient {
    async fn complete(&self, text: &str) -> AppResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::upstream("Text-analysis provider is not configured"))?;

        let start = Instant::now();
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&self.request_body(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Text-analysis provider rejected request");
            return Err(AppError::upstream(format!(
                "Text-analysis provider returned status {}",
                status.as_u16()
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        debug!(
            latency_ms = start.elapsed().as_millis() as u64,
            "Text-analysis request completed"
        );

        Ok(parsed.into_content())
    }
}
