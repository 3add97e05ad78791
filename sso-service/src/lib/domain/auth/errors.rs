use thiserror::Error;

/// Failures reported by a user store.
///
/// `UserExists` and `UserNotFound` are the only signals the domain
/// interprets; everything else is carried opaquely in `Database`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for authentication operations.
///
/// `Internal` keeps the diagnostic for server-side logs only; the protocol
/// layer must not forward it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("Internal error: {0}")]
    Internal(String),
}
