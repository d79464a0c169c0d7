use std::sync::Arc;

use anyhow::Result;
use daygrid_core::config::DaygridConfig;
use daygrid_core::store::EventStore;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<EventStore>>,
    page_size: i64,
}

impl AppState {
    pub fn load(config: &DaygridConfig) -> Result<Self> {
        let store = EventStore::load(&config.events_path())?;
        Ok(Self::new(store, config.page_size))
    }

    pub fn new(store: EventStore, page_size: i64) -> Self {
        AppState {
            store: Arc::new(RwLock::new(store)),
            page_size,
        }
    }

    pub fn store(&self) -> &RwLock<EventStore> {
        &self.store
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }
}
