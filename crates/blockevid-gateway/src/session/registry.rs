use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::ws::Message;
use dashmap::DashMap;
use tokio::sync::mpsc;

/// One session's outbound queue sender.
#[derive(Clone)]
pub struct Connection {
    pub tx: mpsc::Sender<Message>,
}

/// Registry of live wallet sessions: `session_id -> Connection`.
///
/// Session ids are handed out from a monotonic counter so log lines stay
/// cheap to correlate; nothing outside this process ever sees them as
/// credentials.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, Connection>,
    seq: AtomicU64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    /// Allocate a fresh session id.
    pub fn next_session_id(&self) -> String {
        let n = self.seq.fetch_add(1, Ordering::Relaxed);
        format!("sess-{n}")
    }

    pub fn insert(&self, session_id: String, conn: Connection) {
        self.sessions.insert(session_id, conn);
    }

    pub fn remove(&self, session_id: &str) -> Option<Connection> {
        self.sessions.remove(session_id).map(|(_, conn)| conn)
    }

    pub fn get(&self, session_id: &str) -> Option<Connection> {
        self.sessions.get(session_id).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
