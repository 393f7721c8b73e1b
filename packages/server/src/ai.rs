//! OpenAI-compatible chat-completions client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, error, info};
use wardrobe_common::ai::{AiError, AiMessage, AiService, ContentPart, TextRequest};
use wardrobe_common::config::AiAppConfig;

pub struct OpenAiClient {
    client: Client,
    config: AiAppConfig,
}

impl OpenAiClient {
    pub fn new(config: AiAppConfig) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiError::Request(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn payload(&self, request: &TextRequest) -> Value {
        let messages: Vec<Value> = match request {
            TextRequest::Prompt(prompt) => vec![json!({ "role": "user", "content": prompt })],
            TextRequest::Messages(messages) => messages.iter().map(message_json).collect(),
        };
        json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
        })
    }
}

fn message_json(message: &AiMessage) -> Value {
    let content: Vec<Value> = message
        .content
        .iter()
        .map(|part| match part {
            ContentPart::Text { text } => json!({ "type": "text", "text": text }),
            ContentPart::Image { image } => {
                json!({ "type": "image_url", "image_url": { "url": image } })
            }
        })
        .collect();
    json!({ "role": message.role, "content": content })
}

/// Pull the first choice's message content out of a completion response.
fn extract_content(data: &Value) -> Result<String, AiError> {
    if let Some(error) = data.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        return Err(AiError::Service(message.to_string()));
    }

    let choice = data
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .ok_or_else(|| AiError::InvalidResponse("no completions returned".into()))?;

    choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| AiError::InvalidResponse("choice has no message content".into()))
}

#[async_trait]
impl AiService for OpenAiClient {
    async fn generate_text(&self, request: TextRequest) -> Result<String, AiError> {
        let url = format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'));
        info!(%url, model = %self.config.model, "Sending chat completion request");

        let mut builder = self.client.post(&url).json(&self.payload(&request));
        if !self.config.api_key.is_empty() {
            builder = builder.bearer_auth(&self.config.api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;
        debug!(%status, body = %text, "Raw completion response");

        let data: Value = serde_json::from_str(&text).map_err(|e| {
            error!(%status, error = %e, "Completion response is not JSON");
            AiError::InvalidResponse(format!("non-JSON response ({status}): {e}"))
        })?;

        let content = extract_content(&data)?;
        if !status.is_success() {
            return Err(AiError::Service(format!("status {status}")));
        }
        Ok(content)
    }
}
