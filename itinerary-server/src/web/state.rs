//! Application state for the web layer.

use std::sync::Arc;

use crate::pricing::PricingConfig;
use crate::store::InMemoryFlightStore;

/// Shared application state.
///
/// Read-only after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Flight inventory
    pub store: Arc<InMemoryFlightStore>,

    /// Validated pricing configuration
    pub config: Arc<PricingConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: InMemoryFlightStore, config: PricingConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
