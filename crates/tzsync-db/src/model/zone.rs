//! Models for the zone reference table.
//!
//! `tz_zone` holds exactly the latest fetched snapshot, one row per zone
//! name; it is truncated and repopulated on every run.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use tzsync_core::record::ZoneSummary;

use crate::db::schema::tz_zone;

/// One zone reference row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tz_zone)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Zone {
    /// ISO 3166 two-letter country code.
    pub country_code: String,
    pub country_name: String,
    /// IANA zone name, the row's sole identity.
    pub zone_name: String,
    /// Signed seconds from UTC; NULL when the upstream has none.
    pub gmt_offset_seconds: Option<i64>,
    /// Timestamp of the run that wrote this snapshot.
    pub imported_at: DateTime<Utc>,
}

/// New zone reference row for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tz_zone)]
pub struct NewZone<'a> {
    pub country_code: &'a str,
    pub country_name: &'a str,
    pub zone_name: &'a str,
    pub gmt_offset_seconds: Option<i64>,
    pub imported_at: DateTime<Utc>,
}

impl<'a> NewZone<'a> {
    /// ## Summary
    /// Builds an insertable row from a fetched summary, stamped with the
    /// current run's timestamp.
    #[must_use]
    pub fn from_summary(summary: &'a ZoneSummary, imported_at: DateTime<Utc>) -> Self {
        Self {
            country_code: &summary.country_code,
            country_name: &summary.country_name,
            zone_name: &summary.zone_name,
            gmt_offset_seconds: summary.gmt_offset,
            imported_at,
        }
    }
}
