//! Unit tests for domain record normalization and validation.

use crate::record::{EPOCH_OPEN_END, EPOCH_OPEN_START, ZoneInterval, ZoneSummary};

fn interval(zone_name: &str, start: Option<i64>, end: Option<i64>) -> ZoneInterval {
    ZoneInterval {
        country_code: "GB".to_string(),
        country_name: "United Kingdom".to_string(),
        zone_name: zone_name.to_string(),
        gmt_offset: Some(3600),
        dst: Some(true),
        zone_start: start,
        zone_end: end,
    }
}

#[test_log::test]
fn summary_with_missing_offset_is_valid() {
    let summary = ZoneSummary {
        country_code: "AQ".to_string(),
        country_name: "Antarctica".to_string(),
        zone_name: "Antarctica/Troll".to_string(),
        gmt_offset: None,
        dst: None,
    };
    assert!(summary.validate().is_ok());
}

#[test_log::test]
fn summary_with_empty_zone_name_is_rejected() {
    let summary = ZoneSummary {
        country_code: "GB".to_string(),
        country_name: "United Kingdom".to_string(),
        zone_name: String::new(),
        gmt_offset: Some(0),
        dst: Some(false),
    };
    assert!(summary.validate().is_err());
}

#[test_log::test]
fn normalized_fills_open_bounds() {
    let normalized = interval("Europe/London", None, None).normalized();
    assert_eq!(normalized.zone_start, Some(EPOCH_OPEN_START));
    assert_eq!(normalized.zone_end, Some(EPOCH_OPEN_END));
}

#[test_log::test]
fn normalized_keeps_present_bounds() {
    let normalized = interval("Europe/London", Some(0), None).normalized();
    assert_eq!(normalized.zone_start, Some(0));
    assert_eq!(normalized.zone_end, Some(EPOCH_OPEN_END));
}

#[test_log::test]
fn well_formed_interval_is_valid() {
    assert!(interval("Europe/London", Some(0), Some(100)).validate().is_ok());
}

#[test_log::test]
fn inverted_interval_is_rejected() {
    let err = interval("Europe/London", Some(100), Some(0))
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("start"), "got: {err}");
}

#[test_log::test]
fn equal_bounds_are_valid() {
    assert!(interval("Europe/London", Some(5), Some(5)).validate().is_ok());
}

#[test_log::test]
fn missing_offset_is_rejected_for_intervals() {
    let mut record = interval("Europe/London", Some(0), Some(100));
    record.gmt_offset = None;
    assert!(record.validate().is_err());
}

#[test_log::test]
fn missing_dst_flag_is_rejected_for_intervals() {
    let mut record = interval("Europe/London", Some(0), Some(100));
    record.dst = None;
    assert!(record.validate().is_err());
}

#[test_log::test]
fn unnormalized_bounds_are_rejected() {
    assert!(interval("Europe/London", None, Some(100)).validate().is_err());
}

#[test_log::test]
fn deserializes_camel_case_payload() {
    let record: ZoneInterval = serde_json::from_str(
        r#"{
            "countryCode": "US",
            "countryName": "United States",
            "zoneName": "America/New_York",
            "gmtOffset": -18000,
            "dst": false,
            "zoneStart": 1699164000,
            "zoneEnd": 1710054000
        }"#,
    )
    .unwrap();
    assert_eq!(record.zone_name, "America/New_York");
    assert_eq!(record.gmt_offset, Some(-18000));
    assert_eq!(record.zone_start, Some(1_699_164_000));
}
