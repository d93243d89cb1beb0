//! User models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored user record
#[derive(Debug, Clone)]
pub struct User {
    /// Sequential identifier, starting at 1
    pub id: u64,
    /// Username for login
    pub username: String,
    pub email: String,
    /// Unsalted SHA-256 hex digest of the password
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Whether the account is active
    pub active: bool,
}

impl User {
    /// Check if the given email matches this user's
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}

/// Registration input
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Public view of a user, never carries the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            is_active: user.active,
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            is_active: user.active,
        }
    }
}
