use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Well-formed hash with the default cost parameters that no password matches.
const PLACEHOLDER_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
/// Hashes are returned as the bytes of a PHC string, which embeds the
/// algorithm, cost parameters and salt, so callers can store them as an
/// opaque blob.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Salt generation or the hash primitive failed
    pub fn hash(&self, password: &str) -> Result<Vec<u8>, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string().into_bytes())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Comparison is constant-time. A mismatch yields `Ok(false)`.
    ///
    /// # Errors
    /// * `MalformedHash` - The stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &[u8]) -> Result<bool, PasswordError> {
        let hash = std::str::from_utf8(hash)
            .map_err(|e| PasswordError::MalformedHash(format!("not UTF-8: {}", e)))?;
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
        }
    }

    /// Run a full verification against a placeholder hash and discard the result.
    ///
    /// Lets a lookup miss cost the same as a wrong password.
    pub fn verify_placeholder(&self, password: &str) {
        let _ = self.verify(password, PLACEHOLDER_HASH.as_bytes());
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
