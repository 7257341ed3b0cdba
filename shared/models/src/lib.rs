use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned surrogate key of a record.
///
/// A record starts out `Unassigned` and receives its key from the
/// persistence layer on first insert. On the wire it is a nullable number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum RecordId {
    #[default]
    Unassigned,
    Assigned(i64),
}

impl RecordId {
    pub fn get(self) -> Option<i64> {
        match self {
            RecordId::Unassigned => None,
            RecordId::Assigned(id) => Some(id),
        }
    }

    pub fn is_assigned(self) -> bool {
        matches!(self, RecordId::Assigned(_))
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Assigned(id)
    }
}

impl From<Option<i64>> for RecordId {
    fn from(id: Option<i64>) -> Self {
        id.map_or(RecordId::Unassigned, RecordId::Assigned)
    }
}

impl From<RecordId> for Option<i64> {
    fn from(id: RecordId) -> Self {
        id.get()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Unassigned => f.write_str("unassigned"),
            RecordId::Assigned(id) => write!(f, "{id}"),
        }
    }
}

/// One row of the `user` table, held in memory.
///
/// Nothing here is validated: any strings are accepted, and every field can
/// be reassigned after construction, the key included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    id: RecordId,
    user_id: String,
    name: String,
    email: String,
}

impl UserRecord {
    /// Build a record that has not been persisted yet.
    pub fn create(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::Unassigned,
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Overwrite the key unconditionally. Normally only the persistence
    /// layer calls this, right after the row is inserted.
    pub fn set_id(&mut self, id: i64) {
        self.id = RecordId::Assigned(id);
    }

    pub fn clear_id(&mut self) {
        self.id = RecordId::Unassigned;
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = user_id.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}
