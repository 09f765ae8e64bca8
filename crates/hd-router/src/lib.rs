//! Response router: FAQ lookup for trigger keywords, language model otherwise.

pub mod config;
pub mod openai;
pub mod provider;
pub mod rules;

pub use config::{APOLOGY_MESSAGE, FAQ_TRIGGER_KEYWORDS, SYSTEM_PROMPT};
pub use openai::OpenAiProvider;
pub use provider::{ChatProvider, ProviderError};
pub use rules::{decide, is_faq_query, Route};

use hd_faq::FaqStore;
use hd_session::Message;
use std::sync::Arc;
use tracing::{debug, error};

/// Answers a conversation turn. Never fails: errors become [`APOLOGY_MESSAGE`].
#[derive(Clone)]
pub struct ResponseRouter {
    faq: Arc<FaqStore>,
    provider: Arc<dyn ChatProvider>,
}

impl ResponseRouter {
    pub fn new(faq: Arc<FaqStore>, provider: Arc<dyn ChatProvider>) -> Self {
        Self { faq, provider }
    }

    /// Route on the most recent user message and return the reply text.
    pub async fn route(&self, history: &[Message]) -> String {
        match decide(history) {
            Route::Faq { query } => {
                debug!(%query, "routing to FAQ");
                self.faq_answer(query).await
            }
            Route::Model => {
                debug!(history = history.len(), "routing to model");
                self.model_answer(history).await
            }
        }
    }

    async fn faq_answer(&self, query: String) -> String {
        let faq = Arc::clone(&self.faq);
        // File reads happen here; a panic in the lookup is reported as an apology.
        match tokio::task::spawn_blocking(move || faq.lookup(&query)).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(error = %e, "FAQ lookup failed");
                APOLOGY_MESSAGE.to_string()
            }
        }
    }

    async fn model_answer(&self, history: &[Message]) -> String {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message::system(SYSTEM_PROMPT));
        messages.extend_from_slice(history);

        match self.provider.complete(&messages).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "model call failed");
                APOLOGY_MESSAGE.to_string()
            }
        }
    }
}
