//! Conversation messages and the per-session history store.

pub mod manager;
pub mod session;

pub use manager::{SessionManager, DEFAULT_SESSION_ID};
pub use session::*;

#[cfg(test)]
mod tests;
