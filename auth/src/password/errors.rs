use thiserror::Error;

/// Error type for password operations.
///
/// A wrong password is not an error; only an unusable hash or a failure
/// of the hashing primitive is.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}
