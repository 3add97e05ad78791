use std::sync::Arc;

use tonic::Status;

use super::parse_credentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<AS: AuthServicePort>(
    service: Arc<AS>,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let credentials = parse_credentials(request.email, request.password)?;

    let user_id = service.register(credentials).await?;

    Ok(RegisterResponse {
        user_id: user_id.as_i64(),
    })
}
