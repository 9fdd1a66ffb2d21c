use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub key: String,
    pub base_url: String,
    /// Requests per second the upstream plan allows.
    pub rate_limit_per_sec: u32,
    /// Extra seconds added to each request window to absorb clock skew
    /// between us and the upstream rate tracker.
    pub buffer_secs: u64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?.build()?.try_deserialize::<Settings>()?)
    }

    /// Builder with the defaults and all sources attached, so tests can
    /// layer overrides on exactly what `load()` uses.
    pub(crate) fn builder() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>>
    {
        Ok(Config::builder()
            .set_default("database.max_connections", 4)?
            .set_default("api.base_url", "http://api.timezonedb.com/v2.1")?
            .set_default("api.rate_limit_per_sec", 1)?
            .set_default("api.buffer_secs", 1)?
            .set_default("api.timeout_secs", 30)?
            .set_default("logging.level", "info")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false)))
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
