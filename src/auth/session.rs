//! Session management

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session information
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque token, also the lookup key
    pub token: String,
    /// Owner of this session
    pub user_id: u64,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session starting at `now` that lives for `ttl`
    pub fn new(token: String, user_id: u64, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token,
            user_id,
            expires_at: now + ttl,
        }
    }

    /// A session is dead at and after its expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// In-memory session storage.
///
/// Expired sessions are never removed, only ignored.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Create a new session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session under its token
    pub async fn insert(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session);
    }

    /// Get a session by token, expired or not
    pub async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Sessions still valid at `now`
    pub async fn count_active(&self, now: DateTime<Utc>) -> usize {
        self.sessions
            .read()
            .await
            .values()
            .filter(|s| !s.is_expired_at(now))
            .count()
    }

    /// Get session count, including expired ones
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
