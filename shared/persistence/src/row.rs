use models::UserRecord;

/// Raw row as decoded from the `user` table, by column name.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        let mut record = UserRecord::create(row.user_id, row.name, row.email);
        record.set_id(row.id);
        record
    }
}
