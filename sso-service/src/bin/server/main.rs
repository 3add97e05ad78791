use std::path::PathBuf;
use std::sync::Arc;

use auth::Authenticator;
use auth::DefaultClock;
use auth::TokenIssuer;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use sso_service::config::Config;
use sso_service::config::StorageBackend;
use sso_service::domain::auth::ports::UserProvider;
use sso_service::domain::auth::ports::UserSaver;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::InMemoryUserRepository;
use sso_service::outbound::repositories::PostgresUserRepository;
use sso_service::proto::auth_server::AuthServer;
use sso_service::telemetry;
use tonic::transport::Server;

/// `sso-service` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "sso-service", about = "Serve the SSO Auth gRPC API", version)]
struct CliArgs {
    /// Config file to load. Takes priority over `CONFIG_PATH`.
    #[arg(long = "config", value_name = "path")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = CliArgs::parse();
    let config = Config::load_from(args.config)?;

    telemetry::init(config.env);

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    tracing::info!(
        env = ?config.env,
        backend = ?config.database.backend,
        grpc_port = config.server.grpc_port,
        request_timeout_ms = config.server.timeout_ms,
        token_ttl_seconds = config.jwt.token_ttl_seconds,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    let token_issuer = TokenIssuer::new(config.jwt.secret.as_bytes(), Arc::new(DefaultClock))?;
    let authenticator = Arc::new(Authenticator::new(token_issuer));

    match config.database.backend {
        StorageBackend::Postgres => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
            serve(&config, user_repository, authenticator).await
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory user store, users are lost on exit");
            let user_repository = Arc::new(InMemoryUserRepository::new());
            serve(&config, user_repository, authenticator).await
        }
    }
}

async fn serve<R>(
    config: &Config,
    user_repository: Arc<R>,
    authenticator: Arc<Authenticator>,
) -> Result<(), anyhow::Error>
where
    R: UserSaver + UserProvider,
{
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&user_repository),
        authenticator,
        config.jwt.token_ttl(),
    ));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service, config.jwt.token_ttl());
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .timeout(config.server.request_timeout())
        .add_service(AuthServer::new(grpc_service))
        .serve_with_shutdown(grpc_address, shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!(signal = "SIGINT", "Stopping server"),
        _ = terminate => tracing::info!(signal = "SIGTERM", "Stopping server"),
    }
}
