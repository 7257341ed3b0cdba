//! Postgres persistence for [`models::UserRecord`].
//!
//! The table/column mapping lives in [`mapping`]; [`UserRepository`] issues
//! the statements generated from it.

mod config;
mod error;
pub mod mapping;
mod repository;
mod row;

pub use config::{DatabaseConfig, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
pub use error::{PersistenceError, Result};
pub use repository::UserRepository;

use sqlx::{migrate::Migrator, PgPool};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create the `user` table if it is missing.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
