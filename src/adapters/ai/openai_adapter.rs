//! OpenAI-compatible adapter for chat completions.
//!
//! Implements `LlmPort`. Plain-text responses only; no retries, no client-side timeout.

use crate::domain::{CompletionRequest, DomainError, PromptMessage};
use crate::ports::LlmPort;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// OpenAI-compatible LLM adapter.
///
/// Works with the OpenAI API or any endpoint speaking the same chat completions format.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - Bearer token
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Pull the generated text out of a raw response body.
    fn extract_content(body: &str) -> Result<String, DomainError> {
        let chat_response: ChatResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::ExternalService(format!("Failed to parse API response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::ExternalService("No response choices returned".to_string()))?
            .message
            .content
            .ok_or_else(|| DomainError::ExternalService("Response choice has no content".to_string()))
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f32,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[async_trait::async_trait]
impl LlmPort for OpenAiAdapter {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let prompt_len: usize = request.messages.iter().map(|m| m.content.len()).sum();
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            prompt_len,
            "sending chat completion request"
        );

        let body = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %text, "LLM API returned error");
            return Err(DomainError::ExternalService(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let text = response.text().await.map_err(|e| {
            DomainError::ExternalService(format!("Failed to read API response: {}", e))
        })?;

        let content = Self::extract_content(&text)?;
        debug!(content_len = content.len(), "received LLM response");

        Ok(content)
    }
}
