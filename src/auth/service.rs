//! Credential checks and session issuing

use chrono::{DateTime, Duration, Utc};

use super::models::LoginResponse;
use super::password::verify_password;
use super::session::{Session, SessionStore};
use super::token::issue_token;
use crate::config::CompatConfig;
use crate::error::{Error, Result};
use crate::users::{User, UserStore};

/// Session lifetime in hours that the original service actually shipped
pub const LEGACY_SESSION_TTL_HOURS: i64 = 30;

/// Session lifetime in minutes that the original service meant to use
pub const SESSION_TTL_MINUTES: i64 = 30;

/// Login and session resolution over the shared stores
#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    sessions: SessionStore,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(users: UserStore, sessions: SessionStore, compat: &CompatConfig) -> Self {
        let session_ttl = if compat.legacy_session_ttl {
            Duration::hours(LEGACY_SESSION_TTL_HOURS)
        } else {
            Duration::minutes(SESSION_TTL_MINUTES)
        };

        Self {
            users,
            sessions,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Check credentials and open a session
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        self.login_at(username, password, Utc::now()).await
    }

    /// Same as [`login`](Self::login) with an explicit clock reading.
    ///
    /// Unknown usernames and wrong passwords fail with the same error.
    pub async fn login_at(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<LoginResponse> {
        let user = match self.users.find_by_username(username).await {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => {
                tracing::warn!("Failed login attempt for '{}'", username);
                return Err(Error::InvalidCredentials);
            }
        };

        let session = Session::new(issue_token(), user.id, now, self.session_ttl);
        let response = LoginResponse {
            token: session.token.clone(),
            expires_at: session.expires_at,
        };
        self.sessions.insert(session).await;

        tracing::info!("User {} logged in", user.id);
        Ok(response)
    }

    /// Resolve a token to its user if the session is still valid
    pub async fn current_user(&self, token: &str) -> Option<User> {
        self.current_user_at(token, Utc::now()).await
    }

    pub async fn current_user_at(&self, token: &str, now: DateTime<Utc>) -> Option<User> {
        let session = self.sessions.get(token).await?;
        if session.is_expired_at(now) {
            return None;
        }
        self.users.get(session.user_id).await
    }
}
