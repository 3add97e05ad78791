use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// Domain service implementation for authentication.
///
/// Stateless across calls: every operation is an orchestration of the
/// authenticator and the user store. Uniqueness and any other mutual
/// exclusion are left to the store.
pub struct AuthService<US, UP>
where
    US: UserSaver,
    UP: UserProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
}

impl<US, UP> AuthService<US, UP>
where
    US: UserSaver,
    UP: UserProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - Write side of the user store
    /// * `user_provider` - Read side of the user store
    /// * `authenticator` - Password hashing and token issuance
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        authenticator: Arc<Authenticator>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            authenticator,
            token_ttl,
        }
    }
}

#[async_trait]
impl<US, UP> AuthServicePort for AuthService<US, UP>
where
    US: UserSaver,
    UP: UserProvider,
{
    #[tracing::instrument(skip_all, fields(op = "auth.register", email = %credentials.email))]
    async fn register(&self, credentials: Credentials) -> Result<UserId, AuthError> {
        tracing::info!("registering user");

        let pass_hash = self
            .authenticator
            .hash_password(&credentials.password)
            .map_err(|e| {
                tracing::error!(error = %e, "failed to generate password hash");
                AuthError::Internal(e.to_string())
            })?;

        let user_id = self
            .user_saver
            .save_user(&credentials.email, &pass_hash)
            .await
            .map_err(|e| match e {
                StoreError::UserExists(_) => {
                    tracing::warn!(error = %e, "user already exists");
                    AuthError::UserExists
                }
                StoreError::UserNotFound(_) | StoreError::Database(_) => {
                    tracing::error!(error = %e, "failed to save user");
                    AuthError::Internal(e.to_string())
                }
            })?;

        tracing::info!(user_id = %user_id, "user registered");

        Ok(user_id)
    }

    #[tracing::instrument(skip_all, fields(op = "auth.login", email = %credentials.email))]
    async fn login(&self, credentials: Credentials) -> Result<String, AuthError> {
        tracing::info!("attempting to login user");

        let user = self
            .user_provider
            .user(&credentials.email)
            .await
            .map_err(|e| match e {
                StoreError::UserNotFound(_) => {
                    tracing::warn!(error = %e, "user not found");
                    self.authenticator.reject_unknown_user(&credentials.password);
                    AuthError::InvalidCredentials
                }
                StoreError::UserExists(_) | StoreError::Database(_) => {
                    tracing::error!(error = %e, "failed to get user");
                    AuthError::Internal(e.to_string())
                }
            })?;

        let result = self
            .authenticator
            .authenticate(
                &credentials.password,
                &user.pass_hash,
                user.id.as_i64(),
                self.token_ttl,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::info!(user_id = %user.id, "invalid credentials");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(user_id = %user.id, error = %err, "failed to verify password");
                    AuthError::Internal(err.to_string())
                }
                AuthenticationError::JwtError(err) => {
                    tracing::error!(user_id = %user.id, error = %err, "failed to generate token");
                    AuthError::Internal(err.to_string())
                }
            })?;

        tracing::info!(user_id = %user.id, "user logged in successfully");

        Ok(result.access_token)
    }

    // UserNotFound maps to InvalidCredentials here as well as in login.
    // TODO: confirm with the product owner whether an unknown id should get its own status.
    #[tracing::instrument(skip_all, fields(op = "auth.is_admin", user_id = %user_id))]
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        tracing::info!("checking if user is admin");

        let is_admin = self
            .user_provider
            .is_admin(user_id)
            .await
            .map_err(|e| match e {
                StoreError::UserNotFound(_) => {
                    tracing::warn!(error = %e, "user not found");
                    AuthError::InvalidCredentials
                }
                StoreError::UserExists(_) | StoreError::Database(_) => {
                    tracing::error!(error = %e, "failed to check admin status");
                    AuthError::Internal(e.to_string())
                }
            })?;

        tracing::info!(is_admin, "checked if user is admin");

        Ok(is_admin)
    }
}
