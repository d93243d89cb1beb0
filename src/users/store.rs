//! In-memory user table

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockWriteGuard};

use super::models::User;

/// User records keyed by id, plus the id sequence.
///
/// Ids are assigned in increasing order, so iterating the map yields
/// insertion order.
#[derive(Debug, Default)]
pub struct UserTable {
    last_id: u64,
    records: BTreeMap<u64, User>,
}

impl UserTable {
    /// Highest id assigned so far, 0 when empty
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut User> {
        self.records.get_mut(&id)
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Advance the sequence and store the record built for the new id
    pub fn insert_next(&mut self, build: impl FnOnce(u64) -> User) -> &User {
        self.last_id += 1;
        let id = self.last_id;
        self.records.entry(id).or_insert_with(|| build(id))
    }
}

/// Shared handle to the user table
#[derive(Clone, Default)]
pub struct UserStore {
    table: Arc<RwLock<UserTable>>,
}

impl UserStore {
    /// Create an empty user store
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the table for a check-then-insert sequence
    pub async fn write(&self) -> RwLockWriteGuard<'_, UserTable> {
        self.table.write().await
    }

    /// Get a user by id
    pub async fn get(&self, id: u64) -> Option<User> {
        self.table.read().await.get(id).cloned()
    }

    /// First user whose username matches exactly
    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.table
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// All users in insertion order
    pub async fn all(&self) -> Vec<User> {
        self.table.read().await.iter().cloned().collect()
    }

    /// Number of users ever created
    pub async fn count(&self) -> usize {
        self.table.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            username: name.to_string(),
            email: format!("{}@example.com", name),
            password_hash: String::new(),
            created_at: Utc::now(),
            active: true,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let store = UserStore::new();
        {
            let mut table = store.write().await;
            assert_eq!(table.last_id(), 0);
            assert_eq!(table.insert_next(|id| user(id, "a")).id, 1);
            assert_eq!(table.insert_next(|id| user(id, "b")).id, 2);
            assert_eq!(table.last_id(), 2);
        }

        assert_eq!(store.count().await, 2);
        assert_eq!(store.get(2).await.unwrap().username, "b");
        assert!(store.get(3).await.is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_is_exact() {
        let store = UserStore::new();
        store.write().await.insert_next(|id| user(id, "Alice"));

        assert!(store.find_by_username("Alice").await.is_some());
        assert!(store.find_by_username("alice").await.is_none());
    }

    #[tokio::test]
    async fn test_clone_shares_table() {
        let store1 = UserStore::new();
        let store2 = store1.clone();
        store1.write().await.insert_next(|id| user(id, "shared"));

        assert_eq!(store2.count().await, 1);
    }
}
