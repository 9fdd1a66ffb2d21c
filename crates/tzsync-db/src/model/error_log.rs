//! Models for the error sink.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::db::schema::import_error_log;

/// One captured failure.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = import_error_log)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ErrorLogEntry {
    pub id: i64,
    /// Defaults to the write time.
    pub occurred_at: DateTime<Utc>,
    pub message: String,
}

/// New error log row; `id` and `occurred_at` are filled by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = import_error_log)]
pub struct NewErrorLogEntry<'a> {
    pub message: &'a str,
}
