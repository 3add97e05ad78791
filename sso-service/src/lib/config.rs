use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use config::builder::ConfigBuilder;
use config::builder::DefaultState;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Deployment environment, selects the log format and verbosity.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    #[default]
    Local,
    Dev,
    Prod,
}

/// Where user records are kept.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local store, lost on exit. No database is contacted.
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub env: Env,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub grpc_port: u16,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_ttl_seconds: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl ServerConfig {
    /// Deadline applied to every inbound request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl JwtConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_seconds)
    }
}

// Connection strings and signing keys carry secrets; keep them out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("backend", &self.backend)
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}

/// Pick the explicit config file: a command-line path wins over `CONFIG_PATH`.
pub fn resolve_config_path(
    cli_path: Option<PathBuf>,
    env_path: Option<String>,
) -> Option<PathBuf> {
    cli_path.or_else(|| env_path.filter(|p| !p.is_empty()).map(PathBuf::from))
}

impl Config {
    /// Load configuration using only `CONFIG_PATH` for the explicit file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables prefixed with `SSO__` (SSO__JWT__SECRET, SSO__SERVER__GRPC_PORT, etc.)
    /// 2. Explicit config file: `config_path` if given, otherwise `CONFIG_PATH`
    /// 3. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 4. Default config file (config/default.toml)
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "local".to_string());

        let mut builder = config::Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Some(path) = resolve_config_path(config_path, env::var("CONFIG_PATH").ok()) {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        // Example: SSO__DATABASE__URL=postgres://... overrides database.url
        let builder = builder.add_source(Environment::with_prefix("SSO").separator("__"));

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.database.backend == StorageBackend::Postgres && self.database.url.is_empty() {
            return Err(ConfigError::Message(
                "database.url is required for the postgres backend".to_string(),
            ));
        }
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".to_string()));
        }
        if self.jwt.token_ttl_seconds == 0 {
            return Err(ConfigError::Message(
                "jwt.token_ttl_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }
}
