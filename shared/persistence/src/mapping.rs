//! Column mapping for the `user` table.
//!
//! Every statement the repository issues is generated from [`USER_COLUMNS`],
//! so the record type itself never has to know column names.

pub const USER_TABLE: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub column: &'static str,
    pub field: &'static str,
    pub primary_key: bool,
}

impl ColumnMapping {
    const fn key(column: &'static str, field: &'static str) -> Self {
        Self { column, field, primary_key: true }
    }

    const fn value(column: &'static str, field: &'static str) -> Self {
        Self { column, field, primary_key: false }
    }
}

/// Column order here is also the bind order of every generated statement.
pub const USER_COLUMNS: [ColumnMapping; 4] = [
    ColumnMapping::key("id", "id"),
    ColumnMapping::value("user_id", "userId"),
    ColumnMapping::value("name", "name"),
    ColumnMapping::value("email", "email"),
];

pub fn column_for_field(field: &str) -> Option<&'static str> {
    USER_COLUMNS
        .iter()
        .find(|mapping| mapping.field == field)
        .map(|mapping| mapping.column)
}

pub fn key_column() -> &'static str {
    USER_COLUMNS
        .iter()
        .find(|mapping| mapping.primary_key)
        .map(|mapping| mapping.column)
        .unwrap_or("id")
}

fn value_columns() -> impl Iterator<Item = &'static str> {
    USER_COLUMNS
        .iter()
        .filter(|mapping| !mapping.primary_key)
        .map(|mapping| mapping.column)
}

/// Quote a Postgres identifier, doubling any embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn table() -> String {
    quote_ident(USER_TABLE)
}

fn all_columns() -> String {
    USER_COLUMNS
        .iter()
        .map(|mapping| quote_ident(mapping.column))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn insert_statement() -> String {
    let columns: Vec<_> = value_columns().map(quote_ident).collect();
    let placeholders: Vec<_> = (1..=columns.len()).map(|n| format!("${n}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table(),
        columns.join(", "),
        placeholders.join(", "),
        quote_ident(key_column()),
    )
}

/// Value columns bind to `$1..$n`, the key binds last.
pub fn update_statement() -> String {
    let assignments: Vec<_> = value_columns()
        .enumerate()
        .map(|(idx, column)| format!("{} = ${}", quote_ident(column), idx + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        table(),
        assignments.join(", "),
        quote_ident(key_column()),
        assignments.len() + 1,
    )
}

pub fn select_statement() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        all_columns(),
        table(),
        quote_ident(key_column()),
    )
}

pub fn select_by_key_statement() -> String {
    select_by_column_statement(key_column())
}

pub fn select_by_column_statement(column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY {}",
        all_columns(),
        table(),
        quote_ident(column),
        quote_ident(key_column()),
    )
}

pub fn delete_statement() -> String {
    format!("DELETE FROM {} WHERE {} = $1", table(), quote_ident(key_column()))
}

pub fn count_statement() -> String {
    format!("SELECT COUNT(*) FROM {}", table())
}
