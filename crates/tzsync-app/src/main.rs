use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use tzsync_app::run::run;
use tzsync_client::{RequestPacer, TimeZoneDbClient};
use tzsync_core::config::load_config;
use tzsync_db::db::connection::create_pool;
use tzsync_db::migrate::run_migrations;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    tracing::info!("Starting tzsync TimeZoneDB import");

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    run_migrations(&config.database.url).await?;

    let pool = create_pool(
        &config.database.url,
        u32::from(config.database.max_connections),
    )
    .await?;

    let client = TimeZoneDbClient::new(&config.api)?;
    let pacer = RequestPacer::new(config.api.rate_limit_per_sec, config.api.buffer_secs);

    let report = run(&pool, &client, pacer).await?;

    tracing::info!(
        zones_loaded = report.zones_loaded,
        intervals_appended = report.intervals_appended,
        zones_failed = report.zones_failed,
        "Import run complete"
    );

    Ok(())
}
