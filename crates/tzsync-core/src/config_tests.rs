//! Unit tests for configuration defaults.

use crate::config::Settings;

/// Builds settings the way `load()` does, with the two required values
/// supplied as overrides so the defaults are observable.
fn settings_with_required() -> Settings {
    Settings::builder()
        .unwrap()
        .set_override("database.url", "postgres://localhost/tzsync")
        .unwrap()
        .set_override("api.key", "test-key")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap()
}

#[test_log::test]
fn defaults_fill_unset_values() {
    let settings = settings_with_required();

    assert_eq!(settings.database.max_connections, 4);
    assert_eq!(settings.api.base_url, "http://api.timezonedb.com/v2.1");
    assert_eq!(settings.api.rate_limit_per_sec, 1);
    assert_eq!(settings.api.buffer_secs, 1);
    assert_eq!(settings.api.timeout_secs, 30);
    assert_eq!(settings.logging.level, "info");
}

#[test_log::test]
fn supplied_values_pass_through() {
    let settings = settings_with_required();

    assert_eq!(settings.database.url, "postgres://localhost/tzsync");
    assert_eq!(settings.api.key, "test-key");
}

#[test_log::test]
fn overrides_win_over_defaults() {
    let settings: Settings = Settings::builder()
        .unwrap()
        .set_override("database.url", "postgres://localhost/tzsync")
        .unwrap()
        .set_override("api.key", "test-key")
        .unwrap()
        .set_override("api.rate_limit_per_sec", 25)
        .unwrap()
        .set_override("logging.level", "trace")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(settings.api.rate_limit_per_sec, 25);
    assert_eq!(settings.logging.level, "trace");
}
