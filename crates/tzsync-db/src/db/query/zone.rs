//! Full-refresh loader for the zone reference table.

use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::connection::DbConnection;
use crate::db::schema::tz_zone;
use crate::db::transaction::with_transaction;
use crate::error::{DbError, DbResult};
use crate::model::zone::NewZone;

/// ## Summary
/// Replaces the entire reference table with the given snapshot.
///
/// Delete and insert run in one transaction: a failure mid-load rolls
/// back and leaves the previous snapshot intact, so the table is never
/// observably empty or partial.
///
/// ## Errors
/// Returns a database error if the transaction fails; the prior contents
/// survive the rollback.
#[tracing::instrument(skip(conn, snapshot), fields(zone_count = snapshot.len()))]
pub async fn replace_zones<'conn, 'pool>(
    conn: &'conn mut DbConnection<'pool>,
    snapshot: &'conn [NewZone<'conn>],
) -> DbResult<usize> {
    let inserted = with_transaction(&mut **conn, |conn| {
        async move {
            diesel::delete(tz_zone::table).execute(conn).await?;

            let inserted = diesel::insert_into(tz_zone::table)
                .values(snapshot)
                .execute(conn)
                .await?;

            Ok::<_, DbError>(inserted)
        }
        .scope_boxed()
    })
    .await?;

    tracing::info!(zone_count = inserted, "Zone reference table replaced");
    Ok(inserted)
}
