//! Transaction helper for the unit-of-work boundaries.
//!
//! Every loader call wraps its statements in a single transaction via this
//! helper, so a failure mid-load rolls back in full and leaves the prior
//! table contents intact.

use diesel_async::{AsyncConnection, AsyncPgConnection, scoped_futures::ScopedBoxFuture};

/// ## Summary
/// Runs a database transaction and returns the closure result.
///
/// ## Errors
/// Returns any error produced by the closure, or errors raised while
/// starting or committing the transaction. The transaction is rolled back
/// whenever the closure errors.
pub async fn with_transaction<'a, 'conn, T, E, F>(
    conn: &'conn mut AsyncPgConnection,
    callback: F,
) -> Result<T, E>
where
    F: for<'r> FnOnce(&'r mut AsyncPgConnection) -> ScopedBoxFuture<'a, 'r, Result<T, E>>
        + Send
        + 'a,
    E: From<diesel::result::Error> + Send + 'a,
    T: Send + 'a,
    'a: 'conn,
{
    conn.transaction::<_, E, _>(callback).await
}
