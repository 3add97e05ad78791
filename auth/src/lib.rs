//! Authentication primitives for the SSO service
//!
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Session token issuance and validation (HS256 JWT with `uid`/`exp` claims)
//! - Authentication coordination
//!
//! The current time is read through [`mockable::Clock`], so token expiry can
//! be pinned in tests.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use auth::{Authenticator, DefaultClock, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Arc::new(DefaultClock)).unwrap();
//! let auth = Authenticator::new(issuer);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth
//!     .authenticate("password123", &hash, 42, Duration::from_secs(3600))
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.uid, 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use mockable::Clock;
pub use mockable::DefaultClock;
pub use password::PasswordError;
pub use password::PasswordHasher;
