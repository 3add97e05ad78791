use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication domain operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user account.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, credentials: Credentials) -> Result<UserId, AuthError>;

    /// Check credentials and issue a signed session token.
    ///
    /// An unknown email and a wrong password fail identically.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Signed token asserting the user's identity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Internal` - Storage, hash or signing failure
    async fn login(&self, credentials: Credentials) -> Result<String, AuthError>;

    /// Report whether a user holds the admin role.
    ///
    /// # Errors
    /// * `InvalidCredentials` - User does not exist
    /// * `Internal` - Storage failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Write side of the user store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Arguments
    /// * `email` - Unique email address
    /// * `pass_hash` - Opaque password hash
    ///
    /// # Returns
    /// Store-assigned user identifier
    ///
    /// # Errors
    /// * `UserExists` - Email is already present
    /// * `Database` - Any other persistence failure
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<UserId, StoreError>;
}

/// Read side of the user store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `Database` - Persistence failure
    async fn user(&self, email: &str) -> Result<User, StoreError>;

    /// Retrieve the admin flag of a user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    /// * `Database` - Persistence failure
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StoreError>;
}
