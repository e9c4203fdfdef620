use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::{
    error::StoreError,
    repo::UserStore,
    repo_types::{NewUser, User},
};

/// Map-backed store with the same unique-username rule as the `users` table.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.username.clone(), u)).collect();
        Self {
            users: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.users.lock().unwrap().contains_key(username))
    }

    async fn save(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        let stored = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            enabled: user.enabled,
            created_at: OffsetDateTime::now_utc(),
        };
        users.insert(stored.username.clone(), stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: name.into(),
            password_hash: "$argon2id$placeholder".into(),
            role: "USER".into(),
            enabled: true,
        }
    }

    #[tokio::test]
    async fn save_assigns_generated_fields() {
        let store = InMemoryUserStore::default();
        let saved = store.save(new_user("carol")).await.expect("save");
        assert_eq!(saved.username, "carol");
        assert!(!saved.id.is_nil());
        assert!(store.exists_by_username("carol").await.unwrap());
    }

    #[tokio::test]
    async fn save_rejects_duplicate_username() {
        let store = InMemoryUserStore::default();
        store.save(new_user("carol")).await.expect("first save");
        let err = store.save(new_user("carol")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(ref n) if n == "carol"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn lookups_are_case_sensitive() {
        let store = InMemoryUserStore::default();
        store.save(new_user("Admin")).await.unwrap();
        assert!(!store.exists_by_username("admin").await.unwrap());
        assert!(store.find_by_username("admin").await.unwrap().is_none());
    }
}
