use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, SecondsFormat};
use hd_session::{Message, DEFAULT_SESSION_ID};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::warn;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// `POST /chat` body. Both fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Read each field on its own; a missing or mistyped field is `None`.
    pub fn from_body(body: &Bytes) -> Self {
        let fields = body_object(body);
        Self {
            session_id: string_field(&fields, "session_id"),
            message: string_field(&fields, "message"),
        }
    }
}

/// `POST /clear_session` body.
#[derive(Debug, Default, Deserialize)]
pub struct ClearRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ClearRequest {
    pub fn from_body(body: &Bytes) -> Self {
        Self { session_id: string_field(&body_object(body), "session_id") }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub messages: Vec<Message>,
}

/// The body's top-level object. An empty, non-JSON or non-object body reads as `{}`.
fn body_object(body: &Bytes) -> Map<String, Value> {
    if body.is_empty() {
        return Map::new();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            warn!(kind = json_kind(&other), "request body is not an object, using defaults");
            Map::new()
        }
        Err(e) => {
            warn!(error = %e, "unreadable request body, using defaults");
            Map::new()
        }
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            warn!(field = name, kind = json_kind(other), "ignoring non-string field");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Absent, null or blank ids all mean the default session.
fn session_or_default(id: Option<String>) -> String {
    id.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string())
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/clear_session", post(clear_session))
        .route("/api/chat", post(chat))
        .route("/api/clear_session", post(clear_session))
}

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/api/session/{id}", get(session_history))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "sessions": state.chat.sessions().count(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatResponse>, ApiError> {
    let req = ChatRequest::from_body(&body);
    let session_id = session_or_default(req.session_id);
    let message = req.message.unwrap_or_default();

    let chat = state.chat.clone();
    let id = session_id.clone();
    let response = tokio::spawn(async move { chat.turn(&id, &message).await })
        .await
        .map_err(|e| {
            warn!(session_id = %session_id, error = %e, "chat turn aborted");
            ApiError::from(e)
        })?;

    Ok(Json(ChatResponse {
        response,
        session_id,
        timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
    }))
}

async fn clear_session(State(state): State<AppState>, body: Bytes) -> Json<Value> {
    let req = ClearRequest::from_body(&body);
    state.chat.clear(&session_or_default(req.session_id)).await;
    Json(json!({ "status": "success" }))
}

async fn session_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    if !state.chat.sessions().contains(&id) {
        return Err(ApiError::not_found(format!("Session not found: {id}")));
    }
    let messages = state.chat.history(&id).await;
    Ok(Json(HistoryResponse { session_id: id, messages }))
}
