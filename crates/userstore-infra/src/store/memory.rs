//! In-memory user store.
//!
//! Used by tests and as the fallback when no database is configured.
//! Single process only; contents are lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userstore_core::domain::{File, User};
use userstore_core::error::StoreError;
use userstore_core::ports::UserStore;

/// HashMap-backed `UserStore`, keyed on email.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get_user(&self, id: &str) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(StoreError::Duplicate(user.email));
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn update_user(&self, user: User) -> Result<(), StoreError> {
        // Matching nothing is a non-error; the record is written either way.
        self.users.write().await.insert(user.email.clone(), user);
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        self.users.write().await.remove(id);
        Ok(())
    }

    async fn add_file(&self, id: &str, file: File) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(StoreError::NotFound)?;
        user.files.push(file);
        Ok(())
    }

    async fn clear_files(&self, id: &str) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(StoreError::NotFound)?;
        user.files.clear();
        Ok(())
    }

    async fn get_files(&self, id: &str) -> Result<Vec<File>, StoreError> {
        let users = self.users.read().await;
        let user = users.get(id).ok_or(StoreError::NotFound)?;
        Ok(user.files.clone())
    }
}
