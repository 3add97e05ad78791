use std::sync::Arc;
use std::time::Duration;

use tonic::metadata::AsciiMetadataValue;
use tonic::Response;
use tonic::Status;

use super::parse_credentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

/// `session_ttl` becomes the cookie `Max-Age` so the cookie never outlives the token.
pub async fn login<AS: AuthServicePort>(
    service: Arc<AS>,
    request: LoginRequest,
    session_ttl: Duration,
) -> Result<Response<LoginResponse>, Status> {
    let credentials = parse_credentials(request.email, request.password)?;

    let token = service.login(credentials).await?;

    let cookie = session_cookie(&token, session_ttl)?;
    let mut response = Response::new(LoginResponse { token });
    response.metadata_mut().insert("set-cookie", cookie);

    Ok(response)
}

/// `set-cookie` header value carrying the same token as the response body.
fn session_cookie(token: &str, max_age: Duration) -> Result<AsciiMetadataValue, Status> {
    format!(
        "token={}; HttpOnly; Secure; SameSite=None; Max-Age={}",
        token,
        max_age.as_secs()
    )
    .parse()
    .map_err(|e| {
        tracing::error!(error = %e, "token is not a valid header value");
        Status::internal("internal error")
    })
}
