use serde::Deserialize;
use serde::Serialize;

/// Session token payload.
///
/// Carries only the user identity and the expiry instant; tokens are not
/// scoped to an audience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (numeric user identifier)
    pub uid: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}
