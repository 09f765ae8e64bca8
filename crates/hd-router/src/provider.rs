//! Language-model capability used for non-FAQ turns.

use async_trait::async_trait;
use hd_session::Message;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Provider returned no completion")]
    EmptyCompletion,
    #[error("{0}")]
    Other(String),
}

/// A chat-completion service: ordered role-tagged messages in, one text out.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError>;
}
