use models::{RecordId, UserRecord};
use sqlx::{Pool, Postgres};

use crate::error::{PersistenceError, Result};
use crate::mapping;
use crate::row::UserRow;

/// Reads and writes [`UserRecord`]s in the `user` table.
///
/// Rows are moved as-is: nothing is validated and duplicate `user_id`s are
/// left to whatever constraints the schema carries.
#[derive(Clone)]
pub struct UserRepository {
    pool: Pool<Postgres>,
}

impl UserRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    /// Insert an unassigned record and write the generated key back into
    /// it, or update the row of an assigned one in place.
    pub async fn save(&self, record: &mut UserRecord) -> Result<i64> {
        match record.id() {
            RecordId::Unassigned => {
                let id = self.insert(record).await?;
                record.set_id(id);
                Ok(id)
            }
            RecordId::Assigned(id) => {
                self.update(id, record).await?;
                Ok(id)
            }
        }
    }

    async fn insert(&self, record: &UserRecord) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(&mapping::insert_statement())
            .bind(record.user_id())
            .bind(record.name())
            .bind(record.email())
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(id, user_id = record.user_id(), "inserted user");
        Ok(id)
    }

    async fn update(&self, id: i64, record: &UserRecord) -> Result<()> {
        let result = sqlx::query(&mapping::update_statement())
            .bind(record.user_id())
            .bind(record.name())
            .bind(record.email())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(id, "update matched no user row");
            return Err(PersistenceError::not_found(id));
        }

        tracing::debug!(id, "updated user");
        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&mapping::select_by_key_statement())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        tracing::debug!(id, found = row.is_some(), "looked up user by id");
        Ok(row.map(UserRecord::from))
    }

    /// All rows carrying this login handle, oldest first. More than one can
    /// come back since handles are not unique.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<UserRecord>> {
        let column = mapping::column_for_field("userId").unwrap_or("user_id");
        let rows = sqlx::query_as::<_, UserRow>(&mapping::select_by_column_statement(column))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(user_id, matches = rows.len(), "looked up user by handle");
        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    pub async fn find_all(&self) -> Result<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(&mapping::select_statement())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    /// Returns whether a row was actually removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(&mapping::delete_statement())
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "deleted user");
        }
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(&mapping::count_statement())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
