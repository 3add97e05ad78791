use std::sync::Arc;
use std::time::Duration;

use tonic::Request;
use tonic::Response;
use tonic::Status;
use tracing::Instrument;
use uuid::Uuid;

use super::handlers::login;
use super::handlers::register;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::auth_server::Auth as AuthProto;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

/// gRPC adapter for the public `Auth` service.
///
/// Holds the domain service and the session lifetime advertised in the
/// login cookie; every call gets its own `request_id` span for log correlation.
pub struct AuthGrpcService<AS: AuthServicePort> {
    service: Arc<AS>,
    session_ttl: Duration,
}

impl<AS: AuthServicePort> AuthGrpcService<AS> {
    pub fn new(service: Arc<AS>, session_ttl: Duration) -> Self {
        Self {
            service,
            session_ttl,
        }
    }
}

fn request_span(method: &'static str) -> tracing::Span {
    tracing::info_span!("grpc_request", method, request_id = %Uuid::new_v4())
}

#[tonic::async_trait]
impl<AS: AuthServicePort> AuthProto for AuthGrpcService<AS> {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let response = register::register(self.service.clone(), request.into_inner())
            .instrument(request_span("Register"))
            .await?;
        Ok(Response::new(response))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        login::login(self.service.clone(), request.into_inner(), self.session_ttl)
            .instrument(request_span("Login"))
            .await
    }
}
