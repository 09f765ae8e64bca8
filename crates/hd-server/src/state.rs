//! Application state shared across all handlers.

use crate::service::ChatService;
use hd_core::HelpdeskConfig;
use hd_faq::FaqStore;
use hd_router::{ChatProvider, OpenAiProvider, ResponseRouter};
use hd_session::SessionManager;
use std::sync::Arc;
use tracing::warn;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(chat: ChatService) -> Self {
        Self {
            chat,
            start_time: std::time::Instant::now(),
        }
    }

    /// Fresh session store around the given FAQ source and model provider.
    pub fn with_parts(faq: FaqStore, provider: Arc<dyn ChatProvider>) -> Self {
        let router = ResponseRouter::new(Arc::new(faq), provider);
        Self::new(ChatService::new(SessionManager::new(), router))
    }

    pub fn from_config(config: &HelpdeskConfig) -> anyhow::Result<Self> {
        let faq = if config.faq.cache {
            FaqStore::cached(&config.faq.path)
        } else {
            FaqStore::from_file(&config.faq.path)
        };
        if config.provider.api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; non-FAQ questions will get the apology reply");
        }
        let provider = OpenAiProvider::new(&config.provider)?;
        Ok(Self::with_parts(faq, Arc::new(provider)))
    }
}
