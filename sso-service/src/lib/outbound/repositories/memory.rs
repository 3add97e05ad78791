use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// Process-local user store.
///
/// Satisfies the same contracts as the PostgreSQL repository: emails are
/// unique and case-sensitive, identifiers are assigned sequentially from 1.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    /// email -> user id
    by_email: HashMap<String, UserId>,
    /// user id -> stored record
    users: HashMap<UserId, StoredUser>,
    last_id: i64,
}

#[derive(Debug)]
struct StoredUser {
    user: User,
    is_admin: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant the admin role to an existing user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    pub async fn grant_admin(&self, user_id: UserId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let stored = state
            .users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
        stored.is_admin = true;
        Ok(())
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserSaver for InMemoryUserRepository {
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<UserId, StoreError> {
        let mut state = self.state.write().await;

        if state.by_email.contains_key(email) {
            return Err(StoreError::UserExists(email.to_string()));
        }

        state.last_id += 1;
        let id = UserId(state.last_id);
        state.by_email.insert(email.to_string(), id);
        state.users.insert(
            id,
            StoredUser {
                user: User {
                    id,
                    email: email.to_string(),
                    pass_hash: pass_hash.to_vec(),
                },
                is_admin: false,
            },
        );

        tracing::debug!(user_id = %id, "user stored in memory");
        Ok(id)
    }
}

#[async_trait]
impl UserProvider for InMemoryUserRepository {
    async fn user(&self, email: &str) -> Result<User, StoreError> {
        let state = self.state.read().await;

        state
            .by_email
            .get(email)
            .and_then(|id| state.users.get(id))
            .map(|stored| stored.user.clone())
            .ok_or_else(|| StoreError::UserNotFound(email.to_string()))
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StoreError> {
        self.state
            .read()
            .await
            .users
            .get(&user_id)
            .map(|stored| stored.is_admin)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))
    }
}
