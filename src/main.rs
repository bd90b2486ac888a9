use simworld_tracker::app_config::AppConfig;
use simworld_tracker::domain::LocationFix;
use simworld_tracker::domain::events::Event;
use simworld_tracker::location::{TrackerSettings, read_fixes, track};
use simworld_tracker::store::Store;
use simworld_tracker::store_listener::store_listener;
use tokio::io::{BufReader, stdin};
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    let origin = config.scene().origin();
    info!(
        "✅  Loaded configuration, scene origin at ({}, {}, {} m)",
        origin.lat, origin.lon, origin.alt
    );

    let (tx, rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(rx);
    let notifier_rx = store.notifier();

    let listener = task::spawn(store_listener(notifier_rx));
    info!("✅  Initialized store listener");

    let store_handle = task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    let (fix_tx, fix_rx) = mpsc::channel::<LocationFix>(config.core().fix_buffer_size());
    let tracker = task::spawn(track(fix_rx, tx, TrackerSettings::from(&config)));
    info!("✅  Initialized location tracker");

    info!("🔥 {} is up and running, reading location fixes from stdin", env!("CARGO_PKG_NAME"));
    read_fixes(BufReader::new(stdin()), fix_tx).await?;

    let report = tracker.await?;
    store_handle.await?;
    listener.await?;
    info!(accepted = report.accepted, rejected = report.rejected, "👋 {} stopped", env!("CARGO_PKG_NAME"));

    Ok(())
}
