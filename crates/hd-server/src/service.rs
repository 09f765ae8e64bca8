//! One chat turn: append, route, append, all under the session's lock.

use hd_router::ResponseRouter;
use hd_session::{Message, Role, SessionManager};
use tracing::info;

#[derive(Clone)]
pub struct ChatService {
    sessions: SessionManager,
    router: ResponseRouter,
}

impl ChatService {
    pub fn new(sessions: SessionManager, router: ResponseRouter) -> Self {
        Self { sessions, router }
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Run a turn and return the assistant's reply.
    ///
    /// The session lock is held for the whole turn, so concurrent turns on
    /// one session are applied one after the other.
    pub async fn turn(&self, session_id: &str, text: &str) -> String {
        let mut session = self.sessions.lock(session_id).await;
        session.add_message(Role::User, text);
        let reply = self.router.route(&session.messages).await;
        session.add_message(Role::Assistant, reply.as_str());
        info!(session_id, messages = session.message_count(), "turn complete");
        reply
    }

    pub async fn clear(&self, session_id: &str) {
        self.sessions.clear(session_id).await;
        info!(session_id, "session cleared");
    }

    pub async fn history(&self, session_id: &str) -> Vec<Message> {
        self.sessions.get(session_id).await
    }
}
