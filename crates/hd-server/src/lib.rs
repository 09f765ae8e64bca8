//! Helpdesk HTTP API server (Axum) and interactive REPL.
//!
//! Provides the chat and session-clear endpoints, a health probe, a
//! session history view, and the bundled browser front end.

pub mod error;
pub mod repl;
pub mod routes;
pub mod service;
pub mod state;

use axum::Router;
use state::AppState;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::chat_routes())
        .merge(routes::session_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
