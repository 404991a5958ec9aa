use crate::app_config::AppConfig;
use crate::controller::FormController;
use crate::domain::events::FormEvent;
use crate::event_source::forward_events;
use crate::firebase::FirebaseCollection;
use crate::marker_store::MarkerStore;
use crate::view::TracingView;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{info, warn};

mod app_config;
mod bounds_guard;
mod controller;
mod coordinates_deserializer;
mod domain;
mod event_source;
mod firebase;
mod form;
mod marker_store;
mod view;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🌱 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = firebase::new_client(&config)?;
    let store = MarkerStore::new(FirebaseCollection::new(client, &config));
    info!("✅  Opened collection '{}' at {}", config.database().collection(), config.database().url());

    let (tx, rx) = mpsc::channel::<FormEvent>(config.core().event_buffer_size());
    let events = task::spawn(async move { forward_events(BufReader::new(tokio::io::stdin()), tx).await });
    info!("✅  Listening for form events on stdin");

    let mut controller = FormController::new(store, TracingView::new(config.map().bounds()), &config, rx);
    controller.start().await;
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    controller.listen().await;
    drop(controller);
    info!("✅  Closed the collection");

    match events.await? {
        Ok(forwarded) => info!("👋 Handled {} event(s)", forwarded),
        Err(e) => warn!("⚠️ {}", e),
    }

    Ok(())
}
