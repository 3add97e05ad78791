use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Issues signed session tokens asserting a user identity.
///
/// Reads the current time from the injected clock, so expiry is
/// deterministic under test.
pub struct TokenIssuer {
    handler: JwtHandler,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`.
    ///
    /// # Errors
    /// * `InvalidKey` - The secret cannot be used for signing
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Result<Self, JwtError> {
        Ok(Self {
            handler: JwtHandler::new(secret)?,
            clock,
        })
    }

    /// Issue a token for `uid` valid for `ttl` from now.
    ///
    /// # Errors
    /// * `InvalidLifetime` - `ttl` does not fit a timestamp
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, uid: i64, ttl: Duration) -> Result<String, JwtError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| JwtError::InvalidLifetime(e.to_string()))?;
        let issued_at = self.clock.utc();
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::InvalidLifetime(format!("{ttl} overflows")))?;

        let claims = Claims {
            uid,
            exp: expires_at.timestamp(),
        };

        self.handler.encode(&claims)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Expiry is checked by the JWT library against the system time, not
    /// the injected clock.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.handler.decode(token)
    }
}
