//! The import run: fetch zones, refresh the reference table, then fetch
//! and reconcile each zone's detail record.
//!
//! Failures are caught at the boundary of each unit of work — one
//! reference load, one zone's detail batch — written to the error sink,
//! and the run moves on. Nothing short of a broken configuration aborts
//! the run; the next scheduled run is the retry mechanism, made safe by
//! the reconciler's idempotence.

use chrono::Utc;

use tzsync_client::{RequestPacer, TimeZoneDbClient};
use tzsync_db::db::DbProvider;
use tzsync_db::db::query::{error_log, interval, zone};
use tzsync_db::model::interval::NewInterval;
use tzsync_db::model::zone::NewZone;

/// Outcome counters for one import run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunReport {
    /// Rows written to the reference table by the full refresh.
    pub zones_loaded: usize,
    /// Rows appended to the interval history across all zones.
    pub intervals_appended: usize,
    /// Zones whose detail fetch, validation, or append failed.
    pub zones_failed: usize,
}

/// ## Summary
/// Executes one import run against the configured database.
///
/// The run always attempts every zone; per-unit failures land in the
/// error sink and the report, not in the return value.
///
/// ## Errors
/// Returns an error only for failures outside any unit of work, such as
/// the connection pool being unusable from the start.
pub async fn run(
    provider: &dyn DbProvider,
    client: &TimeZoneDbClient,
    mut pacer: RequestPacer,
) -> anyhow::Result<RunReport> {
    let run_started_at = Utc::now();
    let mut report = RunReport::default();

    let summaries = match client.list_time_zones().await {
        Ok(summaries) => summaries,
        Err(err) => {
            record_failure(provider, &format!("zone list fetch failed: {err}")).await;
            return Ok(report);
        }
    };

    if summaries.is_empty() {
        record_failure(provider, "No data received from API. List query failed.").await;
        return Ok(report);
    }

    // Full refresh of the reference table.
    let mut snapshot: Vec<NewZone<'_>> = Vec::with_capacity(summaries.len());
    for summary in &summaries {
        match summary.validate() {
            Ok(()) => snapshot.push(NewZone::from_summary(summary, run_started_at)),
            Err(err) => record_failure(provider, &format!("validation failure: {err}")).await,
        }
    }

    if snapshot.is_empty() {
        record_failure(provider, "no valid zone references in API response").await;
        return Ok(report);
    }

    let refreshed = async {
        let mut conn = provider.get_connection().await?;
        zone::replace_zones(&mut conn, &snapshot).await
    }
    .await;

    match refreshed {
        Ok(count) => report.zones_loaded = count,
        Err(err) => {
            record_failure(provider, &format!("zone reference refresh failed: {err}")).await;
        }
    }

    // One zone at a time, paced to the upstream rate limit.
    let total_zones = summaries.len();
    for (index, summary) in summaries.iter().enumerate() {
        pacer.pace().await;

        let zone_name = &summary.zone_name;
        let detail = match client.zone_detail(zone_name).await {
            Ok(detail) => detail,
            Err(err) => {
                report.zones_failed += 1;
                record_failure(
                    provider,
                    &format!("zone detail fetch failed for {zone_name}: {err}"),
                )
                .await;
                continue;
            }
        };

        if let Err(err) = detail.validate() {
            report.zones_failed += 1;
            record_failure(provider, &format!("validation failure: {err}")).await;
            continue;
        }

        let candidate = match NewInterval::from_record(&detail, run_started_at) {
            Ok(candidate) => candidate,
            Err(err) => {
                // Unreachable after validate(); if it fires, the loader
                // itself is broken, not the data source.
                report.zones_failed += 1;
                record_failure(provider, &format!("internal error: {err}")).await;
                continue;
            }
        };

        let appended = async {
            let mut conn = provider.get_connection().await?;
            interval::append_new_intervals(&mut conn, std::slice::from_ref(&candidate)).await
        }
        .await;

        match appended {
            Ok(count) => report.intervals_appended += count,
            Err(err) => {
                report.zones_failed += 1;
                record_failure(
                    provider,
                    &format!("interval append failed for {zone_name}: {err}"),
                )
                .await;
                continue;
            }
        }

        tracing::info!(
            zone = %zone_name,
            progress = %format!("{}/{total_zones}", index + 1),
            "Zone reconciled"
        );
    }

    Ok(report)
}

/// Writes one failure to the error sink, falling back to the process log
/// when the sink itself is unreachable. Orchestration bugs are tagged so
/// operators can tell them apart from upstream misbehavior.
async fn record_failure(provider: &dyn DbProvider, message: &str) {
    tracing::warn!(message, "Recording run failure");

    let written = async {
        let mut conn = provider.get_connection().await?;
        error_log::log_error(&mut conn, message).await
    }
    .await;

    if let Err(err) = written {
        tracing::error!(error = %err, message, "Failed to write to the error log");
    }
}
