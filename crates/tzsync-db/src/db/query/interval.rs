//! Incremental reconciler for the interval history table.
//!
//! Candidates fetched in the current run are diffed against persisted
//! history in bulk: one `SELECT` of the composite keys already present
//! for the candidate zone names, a hash-set difference, and one `INSERT`
//! of exactly the unmatched subset. The cost stays proportional to the
//! batch size, never to a round trip per row, and rows already present
//! are left completely untouched.

use std::collections::HashSet;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::connection::DbConnection;
use crate::db::schema::tz_zone_interval;
use crate::db::transaction::with_transaction;
use crate::error::{DbError, DbResult};
use crate::model::interval::NewInterval;

/// Persisted composite key, as loaded by the staged read.
pub type StoredKey = (String, i64, i64);

/// ## Summary
/// Partitions candidates into the subset whose composite identity is not
/// in `existing`, collapsing duplicate identities within the batch to
/// their first occurrence.
///
/// This is the set-difference at the heart of the reconciler, kept pure
/// so the append/idempotence properties are testable without a database.
#[must_use]
pub fn partition_unseen<'a, 'rec>(
    candidates: &'a [NewInterval<'rec>],
    existing: &[StoredKey],
) -> Vec<&'a NewInterval<'rec>> {
    let mut seen: HashSet<(&str, i64, i64)> = existing
        .iter()
        .map(|(zone_name, start, end)| (zone_name.as_str(), *start, *end))
        .collect();

    candidates
        .iter()
        .filter(|candidate| seen.insert(candidate.key()))
        .collect()
}

/// ## Summary
/// Appends the candidates whose composite identity is absent from the
/// history table and returns how many rows were appended.
///
/// Runs as one transaction: a bulk read of the keys already persisted
/// for the candidate zone names, the pure set difference, and a bulk
/// insert of the unmatched subset. Matched rows are never updated — the
/// history is immutable once written — so re-running with the same
/// candidates appends zero rows.
///
/// ## Errors
/// Returns a database error if the transaction fails; no partial subset
/// of the batch is left behind.
#[tracing::instrument(skip(conn, candidates), fields(candidate_count = candidates.len()))]
pub async fn append_new_intervals<'conn, 'pool>(
    conn: &'conn mut DbConnection<'pool>,
    candidates: &'conn [NewInterval<'conn>],
) -> DbResult<usize> {
    if candidates.is_empty() {
        return Ok(0);
    }

    let appended = with_transaction(&mut **conn, |conn| {
        async move {
            let zone_names: Vec<&str> = candidates
                .iter()
                .map(|candidate| candidate.zone_name)
                .collect();

            let existing: Vec<StoredKey> = tz_zone_interval::table
                .filter(tz_zone_interval::zone_name.eq_any(zone_names))
                .select((
                    tz_zone_interval::zone_name,
                    tz_zone_interval::zone_start,
                    tz_zone_interval::zone_end,
                ))
                .load(conn)
                .await?;

            let fresh = partition_unseen(candidates, &existing);

            if fresh.is_empty() {
                return Ok::<_, DbError>(0);
            }

            let appended = diesel::insert_into(tz_zone_interval::table)
                .values(fresh)
                .execute(conn)
                .await?;

            Ok::<_, DbError>(appended)
        }
        .scope_boxed()
    })
    .await?;

    tracing::debug!(appended, "Interval history reconciled");
    Ok(appended)
}
