//! Error sink writes.
//!
//! Failures caught at unit-of-work boundaries land here instead of
//! terminating the run. The log is append-only and never read back by
//! the system; operators inspect it to assess run health.

use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::import_error_log;
use crate::error::DbResult;
use crate::model::error_log::NewErrorLogEntry;

/// Column bound on `import_error_log.message`.
pub const MESSAGE_MAX_CHARS: usize = 1024;

/// ## Summary
/// Truncates a message to the column bound on a char boundary.
#[must_use]
pub fn truncate_message(message: &str) -> &str {
    message
        .char_indices()
        .nth(MESSAGE_MAX_CHARS)
        .map_or(message, |(index, _)| &message[..index])
}

/// ## Summary
/// Appends one failure to the error log; `occurred_at` is filled by the
/// database at write time.
///
/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, message))]
pub async fn log_error(conn: &mut DbConnection<'_>, message: &str) -> DbResult<()> {
    let entry = NewErrorLogEntry {
        message: truncate_message(message),
    };

    diesel::insert_into(import_error_log::table)
        .values(&entry)
        .execute(conn)
        .await?;

    Ok(())
}
