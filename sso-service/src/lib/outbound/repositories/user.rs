use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// PostgreSQL implementation of both user store capabilities.
///
/// Email uniqueness comes from the `users_email_key` constraint; a
/// violation is the only error translated into a domain signal.
pub struct PostgresUserRepository {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pass_hash: Vec<u8>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            email: row.email,
            pass_hash: row.pass_hash,
        }
    }
}

impl PostgresUserRepository {
    /// Create a new PostgreSQL user repository.
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserSaver for PostgresUserRepository {
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<UserId, StoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(pass_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StoreError::UserExists(email.to_string());
                }
            }
            StoreError::Database(e.to_string())
        })?;

        Ok(UserId(id))
    }
}

#[async_trait]
impl UserProvider for PostgresUserRepository {
    async fn user(&self, email: &str) -> Result<User, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, pass_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(User::from)
            .ok_or_else(|| StoreError::UserNotFound(email.to_string()))
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StoreError> {
        let is_admin: Option<bool> = sqlx::query_scalar(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        is_admin.ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))
    }
}
