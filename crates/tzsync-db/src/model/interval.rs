//! Models for the interval history table.
//!
//! `tz_zone_interval` is append-only: a row's composite identity
//! `(zone_name, zone_start, zone_end)` is written once and never updated
//! or deleted by normal operation.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use tzsync_core::error::CoreResult;
use tzsync_core::record::{EPOCH_OPEN_END, EPOCH_OPEN_START, ZoneInterval};

use crate::db::schema::tz_zone_interval;

/// One persisted offset/DST interval.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tz_zone_interval)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Interval {
    pub zone_name: String,
    /// Interval start, epoch seconds.
    pub zone_start: i64,
    /// Interval end, epoch seconds.
    pub zone_end: i64,
    pub country_code: String,
    pub country_name: String,
    pub gmt_offset_seconds: i64,
    pub is_dst: bool,
    pub imported_at: DateTime<Utc>,
}

/// New interval row for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tz_zone_interval)]
pub struct NewInterval<'a> {
    pub zone_name: &'a str,
    pub zone_start: i64,
    pub zone_end: i64,
    pub country_code: &'a str,
    pub country_name: &'a str,
    pub gmt_offset_seconds: i64,
    pub is_dst: bool,
    pub imported_at: DateTime<Utc>,
}

impl<'a> NewInterval<'a> {
    /// ## Summary
    /// Builds an insertable row from a fetched record, stamped with the
    /// current run's timestamp.
    ///
    /// ## Errors
    /// Returns a validation error if the record is not storable (missing
    /// offset or DST flag, inverted or unnormalized bounds).
    pub fn from_record(record: &'a ZoneInterval, imported_at: DateTime<Utc>) -> CoreResult<Self> {
        record.validate()?;

        Ok(Self {
            zone_name: &record.zone_name,
            zone_start: record.zone_start.unwrap_or(EPOCH_OPEN_START),
            zone_end: record.zone_end.unwrap_or(EPOCH_OPEN_END),
            country_code: &record.country_code,
            country_name: &record.country_name,
            gmt_offset_seconds: record.gmt_offset.unwrap_or_default(),
            is_dst: record.dst.unwrap_or_default(),
            imported_at,
        })
    }

    /// Composite identity of this row.
    #[must_use]
    pub fn key(&self) -> (&'a str, i64, i64) {
        (self.zone_name, self.zone_start, self.zone_end)
    }
}
