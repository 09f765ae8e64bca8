//! Keyword gate between the FAQ and the model.

use crate::config::FAQ_TRIGGER_KEYWORDS;
use hd_session::{last_user_message, Message};

/// Where a turn is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// FAQ lookup with the lowercased user message.
    Faq { query: String },
    /// Model call with the full history.
    Model,
}

pub fn is_faq_query(text: &str) -> bool {
    let text = text.to_lowercase();
    FAQ_TRIGGER_KEYWORDS.iter().any(|kw| text.contains(kw))
}

/// Decide from the most recent user message. Empty history goes to the model.
pub fn decide(history: &[Message]) -> Route {
    match last_user_message(history) {
        Some(msg) if is_faq_query(&msg.content) => Route::Faq {
            query: msg.content.to_lowercase(),
        },
        _ => Route::Model,
    }
}
