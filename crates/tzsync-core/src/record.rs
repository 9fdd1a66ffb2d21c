//! Domain records exchanged between the API client and the database layer.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Lower bound used when the upstream omits an interval start.
///
/// The upstream leaves `zoneStart`/`zoneEnd` out for open-ended intervals;
/// the extreme representable epochs stand in so the composite key stays
/// total. Note this is `-i64::MAX`, not `i64::MIN`.
pub const EPOCH_OPEN_START: i64 = -i64::MAX;

/// Upper bound used when the upstream omits an interval end.
pub const EPOCH_OPEN_END: i64 = i64::MAX;

/// One zone as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub country_code: String,
    pub country_name: String,
    pub zone_name: String,
    /// Absent for a handful of zones the upstream has no offset for.
    pub gmt_offset: Option<i64>,
    pub dst: Option<bool>,
}

impl ZoneSummary {
    /// ## Summary
    /// Checks the summary is usable as a reference row.
    ///
    /// A missing GMT offset is permitted (the reference column is
    /// nullable); an empty zone name is not, since it is the row's sole
    /// identity.
    ///
    /// ## Errors
    /// Returns a validation error for an empty zone name.
    pub fn validate(&self) -> CoreResult<()> {
        if self.zone_name.is_empty() {
            return Err(CoreError::ValidationError(
                "zone summary with empty zone name".to_string(),
            ));
        }
        Ok(())
    }
}

/// One historical offset/DST interval as returned by the detail endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInterval {
    pub country_code: String,
    pub country_name: String,
    pub zone_name: String,
    pub gmt_offset: Option<i64>,
    pub dst: Option<bool>,
    pub zone_start: Option<i64>,
    pub zone_end: Option<i64>,
}

impl ZoneInterval {
    /// ## Summary
    /// Fills absent interval bounds with the open-ended sentinels.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.zone_start.is_none() {
            self.zone_start = Some(EPOCH_OPEN_START);
        }
        if self.zone_end.is_none() {
            self.zone_end = Some(EPOCH_OPEN_END);
        }
        self
    }

    /// ## Summary
    /// Checks the interval is storable in the history table.
    ///
    /// The history columns are non-nullable, so a missing offset or DST
    /// flag fails here rather than at insert time, and an inverted
    /// interval is rejected rather than silently accepted.
    ///
    /// ## Errors
    /// Returns a validation error for an empty zone name, a missing
    /// offset or DST flag, or `zone_start > zone_end`.
    pub fn validate(&self) -> CoreResult<()> {
        if self.zone_name.is_empty() {
            return Err(CoreError::ValidationError(
                "zone interval with empty zone name".to_string(),
            ));
        }
        if self.gmt_offset.is_none() {
            return Err(CoreError::ValidationError(format!(
                "zone interval for {} has no GMT offset",
                self.zone_name
            )));
        }
        if self.dst.is_none() {
            return Err(CoreError::ValidationError(format!(
                "zone interval for {} has no DST flag",
                self.zone_name
            )));
        }
        match (self.zone_start, self.zone_end) {
            (Some(start), Some(end)) if start > end => {
                Err(CoreError::ValidationError(format!(
                    "zone interval for {} has start {start} after end {end}",
                    self.zone_name
                )))
            }
            (None, _) | (_, None) => Err(CoreError::ValidationError(format!(
                "zone interval for {} has unnormalized bounds",
                self.zone_name
            ))),
            _ => Ok(()),
        }
    }
}
