use thiserror::Error;
use tonic::Status;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;

pub mod login;
pub mod register;

/// Request fields failing presence validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCredentialsError {
    #[error("email is required")]
    MissingEmail,

    #[error("password is required")]
    MissingPassword,
}

/// Build credentials from raw request fields, checking each is present.
pub fn parse_credentials(
    email: String,
    password: String,
) -> Result<Credentials, ParseCredentialsError> {
    if email.is_empty() {
        return Err(ParseCredentialsError::MissingEmail);
    }
    if password.is_empty() {
        return Err(ParseCredentialsError::MissingPassword);
    }
    Ok(Credentials::new(email, password))
}

impl From<ParseCredentialsError> for Status {
    fn from(err: ParseCredentialsError) -> Self {
        Status::invalid_argument(err.to_string())
    }
}

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::unauthenticated("invalid credentials"),
            AuthError::UserExists => Status::already_exists("user already exists"),
            AuthError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed with internal error");
                Status::internal("internal error")
            }
        }
    }
}
