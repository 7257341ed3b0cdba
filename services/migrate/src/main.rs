//! Brings the `user` table up to date against `DATABASE_URL` and reports
//! how many rows it holds.

use anyhow::Context;
use persistence::{DatabaseConfig, UserRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DatabaseConfig::from_env();
    tracing::info!(max_connections = config.max_connections, "connecting to postgres");

    let pool = config
        .connect()
        .await
        .context("failed to connect to postgres")?;

    persistence::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let users = UserRepository::new(pool)
        .count()
        .await
        .context("failed to count users")?;
    tracing::info!(users, "user table ready");

    Ok(())
}
