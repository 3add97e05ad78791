use thiserror::Error;

/// Error type for token signing and verification.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Signing key is unusable: {0}")]
    InvalidKey(String),

    #[error("Token lifetime out of range: {0}")]
    InvalidLifetime(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,
}
