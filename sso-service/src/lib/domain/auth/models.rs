use std::fmt;

/// Registered user account.
///
/// The password hash is opaque to the domain: it is produced and checked by
/// the password hasher and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub pass_hash: Vec<u8>,
}

/// User unique identifier type, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email and plaintext password supplied with a single request.
///
/// Never persisted. `Debug` output redacts the password.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Construct credentials from already validated fields.
    ///
    /// # Arguments
    /// * `email` - Email address, compared case-sensitively by the store
    /// * `password` - Plain text password (hashed or verified by the service)
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("a@x.com".to_string(), "hunter2".to_string());
        let rendered = format!("{:?}", credentials);

        assert!(rendered.contains("a@x.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
