use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI request failed: {0}")]
    Request(String),

    #[error("AI service returned an error: {0}")]
    Service(String),

    #[error("Invalid AI response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One part of a multimodal message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text { text: String },
    /// An image referenced by URL.
    Image { image: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl AiMessage {
    pub fn user(content: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content,
        }
    }
}

/// Input accepted by [`AiService::generate_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRequest {
    Prompt(String),
    Messages(Vec<AiMessage>),
}

/// Text/vision generation service. The returned text is expected, but not
/// guaranteed, to be JSON; callers parse it themselves.
#[async_trait]
pub trait AiService: Send + Sync {
    async fn generate_text(&self, request: TextRequest) -> Result<String, AiError>;
}
