use super::{Message, Session};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::debug;

/// Session id used when a request does not name one.
pub const DEFAULT_SESSION_ID: &str = "default";

type SessionHandle = Arc<AsyncMutex<Session>>;

/// In-memory session store. Sessions are created lazily and never evicted.
///
/// The outer map lock is only held to look up or insert a handle. Each
/// session has its own async lock, so a slow turn on one session never
/// blocks another.
#[derive(Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<String, SessionHandle>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, id: &str) -> SessionHandle {
        let mut map = self.sessions.lock();
        map.entry(id.to_string())
            .or_insert_with(|| {
                debug!(session_id = id, "creating session");
                Arc::new(AsyncMutex::new(Session::new(id)))
            })
            .clone()
    }

    fn existing(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.lock().get(id).cloned()
    }

    /// Exclusive access to a session for a whole turn, creating it if absent.
    pub async fn lock(&self, id: &str) -> OwnedMutexGuard<Session> {
        self.handle(id).lock_owned().await
    }

    pub async fn append(&self, id: &str, message: Message) {
        self.lock(id).await.push(message);
    }

    /// Reset a session's history. Idempotent; creates the session if absent.
    pub async fn clear(&self, id: &str) {
        self.lock(id).await.clear();
    }

    /// Snapshot of a session's history; empty for unknown ids.
    pub async fn get(&self, id: &str) -> Vec<Message> {
        match self.existing(id) {
            Some(handle) => handle.lock().await.messages.clone(),
            None => Vec::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.lock().contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.lock().keys().cloned().collect();
        ids.sort();
        ids
    }
}
