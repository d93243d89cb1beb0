//! User registration, lookup and deletion

use chrono::Utc;

use super::models::{NewUser, User, UserView};
use super::store::{UserStore, UserTable};
use crate::auth::password::hash_password;
use crate::config::CompatConfig;
use crate::error::{Error, Result};

/// User operations over the shared user store
#[derive(Clone)]
pub struct UserService {
    store: UserStore,
    compat: CompatConfig,
}

impl UserService {
    pub fn new(store: UserStore, compat: CompatConfig) -> Self {
        Self { store, compat }
    }

    /// Register a new user.
    ///
    /// The table stays write-locked from the uniqueness checks through the
    /// insert, so concurrent registrations cannot interleave.
    pub async fn register(&self, new_user: NewUser) -> Result<UserView> {
        let mut table = self.store.write().await;

        if table.iter().any(|u| u.username == new_user.username) {
            return Err(Error::UsernameTaken);
        }

        if email_taken(&table, &new_user.email, self.compat.legacy_email_check) {
            return Err(Error::EmailTaken);
        }

        let password_hash = hash_password(&new_user.password);
        let user = table.insert_next(|id| User {
            id,
            username: new_user.username,
            email: new_user.email,
            password_hash,
            created_at: Utc::now(),
            active: true,
        });

        tracing::info!("Registered user {} ({})", user.id, user.username);
        Ok(UserView::from(user))
    }

    /// All users in insertion order, including inactive ones
    pub async fn list(&self) -> Vec<UserView> {
        self.store.all().await.into_iter().map(UserView::from).collect()
    }

    /// Number of users ever registered, active or not
    pub async fn count(&self) -> usize {
        self.store.count().await
    }

    /// Get a single user
    pub async fn get(&self, id: u64) -> Result<UserView> {
        self.store
            .get(id)
            .await
            .map(UserView::from)
            .ok_or_else(|| Error::UserNotFound(id.to_string()))
    }

    /// Soft-delete a user.
    ///
    /// With `legacy_soft_delete` the user is only looked up and left active.
    pub async fn delete(&self, id: u64) -> Result<()> {
        let mut table = self.store.write().await;
        let user = table
            .get_mut(id)
            .ok_or_else(|| Error::UserNotFound(id.to_string()))?;

        if self.compat.legacy_soft_delete {
            tracing::debug!("Delete of user {} reported without deactivation", id);
        } else {
            user.active = false;
            tracing::info!("Deactivated user {}", id);
        }

        Ok(())
    }
}

/// Duplicate-email check.
///
/// The legacy scan covers ids `0..last_id`. Ids start at 1, so the most
/// recently created user is never compared.
fn email_taken(table: &UserTable, email: &str, legacy: bool) -> bool {
    if legacy {
        (0..table.last_id())
            .filter_map(|id| table.get(id))
            .any(|u| u.has_email(email))
    } else {
        table.iter().any(|u| u.has_email(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_view() {
        let service = UserService::new(UserStore::new(), CompatConfig::default());
        let view = service
            .register(new_user("alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(view.id, 1);
        assert_eq!(view.username, "alice");
        assert!(view.is_active);
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let store = UserStore::new();
        let service = UserService::new(store.clone(), CompatConfig::default());
        service
            .register(new_user("alice", "alice@example.com"))
            .await
            .unwrap();

        let stored = store.get(1).await.unwrap();
        assert_ne!(stored.password_hash, "password");
        assert_eq!(stored.password_hash, hash_password("password"));
    }

    #[tokio::test]
    async fn test_legacy_email_scan_skips_newest() {
        let store = UserStore::new();
        let service = UserService::new(store.clone(), CompatConfig::default());
        service.register(new_user("a", "a@example.com")).await.unwrap();
        service.register(new_user("b", "b@example.com")).await.unwrap();

        let table = store.write().await;
        assert!(email_taken(&table, "a@example.com", true));
        assert!(!email_taken(&table, "b@example.com", true));
        assert!(email_taken(&table, "b@example.com", false));
    }
}
