use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Env;

/// Install the global tracing subscriber for `env`.
///
/// - `local`: human-readable output, debug level
/// - `dev`: JSON output, debug level
/// - `prod`: JSON output, info level
///
/// `RUST_LOG` takes precedence over the per-environment level when set.
pub fn init(env: Env) {
    let default_directives = match env {
        Env::Local | Env::Dev => "sso_service=debug,auth=debug,info",
        Env::Prod => "sso_service=info,info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(filter);

    match env {
        Env::Local => registry.with(tracing_subscriber::fmt::layer()).init(),
        Env::Dev | Env::Prod => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
    }
}
