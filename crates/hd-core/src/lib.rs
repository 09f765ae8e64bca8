//! Shared configuration and error types for the helpdesk workspace.

pub mod config;
pub mod error;

pub use config::{FaqConfig, HelpdeskConfig, ProviderConfig, ServerConfig};
pub use error::{HdError, Result};
