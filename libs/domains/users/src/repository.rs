use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
///
/// Implementations must return `find_all` in insertion order and must keep
/// emails unique, reporting a clash on `save_new` as `UserError::DuplicateEmail`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, oldest first
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Get a user by email (exact match)
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Get a user by ID
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Check if a user with this ID exists
    async fn exists_by_id(&self, id: i64) -> UserResult<bool>;

    /// Insert a new user, assigning a fresh ID
    async fn save_new(&self, user: NewUser) -> UserResult<User>;

    /// Overwrite the stored user with the same ID
    async fn save(&self, user: User) -> UserResult<User>;

    /// Delete a user by ID; deleting an absent ID is a no-op
    async fn delete_by_id(&self, id: i64) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct UserTable {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// IDs are handed out from a counter and never reused, so iterating the
/// ordered map yields users in the order they were created.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        let table = self.table.read().await;
        Ok(table.rows.contains_key(&id))
    }

    async fn save_new(&self, user: NewUser) -> UserResult<User> {
        // The write lock covers both the uniqueness check and the insert
        let mut table = self.table.write().await;

        if table.rows.values().any(|u| u.email == user.email) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        table.next_id += 1;
        let user = User::with_id(table.next_id, user);
        table.rows.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn save(&self, user: User) -> UserResult<User> {
        let mut table = self.table.write().await;

        match table.rows.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                tracing::info!(user_id = %user.id, "Updated user");
                Ok(user)
            }
            None => Err(UserError::NotFound(user.id)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let mut table = self.table.write().await;

        if table.rows.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(())
    }
}
