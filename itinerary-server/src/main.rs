use std::error::Error;

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use itinerary_server::inventory::load_inventory;
use itinerary_server::settings::AppConfig;
use itinerary_server::store::InMemoryFlightStore;
use itinerary_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!("startup failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    let pricing = config.pricing_config()?;

    let flights = load_inventory(
        &config.inventory.flights_path,
        &config.inventory.prices_path,
    )?;
    let store = InMemoryFlightStore::new(flights)?;
    if store.is_empty() {
        warn!("flight inventory is empty; every query will return no itineraries");
    } else {
        info!(flights = store.len(), "flight store ready");
    }

    let app = create_router(AppState::new(store, pricing));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Itinerary pricer listening on http://{addr}");
    info!("  GET  /health");
    info!("  POST /itinerary/priceRoundTrip");
    info!("  POST /itinerary/priceWithConnections");
    info!("  POST /itinerary/priceAllRoundTrip");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
    }
}
