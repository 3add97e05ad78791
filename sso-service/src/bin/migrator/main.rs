//! Apply pending database migrations and exit.
use std::path::PathBuf;

use clap::Parser;
use sqlx::migrate::Migrate;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sso_service::config::Config;
use sso_service::config::Env;
use sso_service::telemetry;

static EMBEDDED_MIGRATIONS: Migrator = sqlx::migrate!("./migrations");

/// `migrator` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "migrator",
    about = "Apply pending SSO database migrations",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `database.url` from the service configuration.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Directory of migration scripts. Defaults to the migrations embedded at build time.
    #[arg(long = "migrations-path", value_name = "path")]
    migrations_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = CliArgs::parse();

    let (env, database_url) = match args.database_url {
        Some(url) => (Env::default(), url),
        None => {
            let config = Config::load()?;
            (config.env, config.database.url)
        }
    };
    telemetry::init(env);

    if database_url.is_empty() {
        anyhow::bail!("no database url: pass --database-url or set database.url");
    }

    let loaded;
    let migrator = match &args.migrations_path {
        Some(path) => {
            loaded = Migrator::new(path.as_path()).await?;
            &loaded
        }
        None => &EMBEDDED_MIGRATIONS,
    };

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    let pending = {
        let mut conn = pool.acquire().await?;
        conn.ensure_migrations_table().await?;
        let applied = conn.list_applied_migrations().await?;
        migrator
            .iter()
            .filter(|m| !m.migration_type.is_down_migration())
            .filter(|m| !applied.iter().any(|a| a.version == m.version))
            .count()
    };

    if pending == 0 {
        tracing::info!("no migrations to apply");
        return Ok(());
    }

    migrator.run(&pool).await?;
    tracing::info!(applied = pending, "migrations applied successfully");

    Ok(())
}
