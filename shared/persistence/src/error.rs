use thiserror::Error;

pub type Result<T> = std::result::Result<T, PersistenceError>;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("no user row with id {id}")]
    NotFound { id: i64 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl PersistenceError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }
}
