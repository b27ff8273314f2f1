//! Application state - shared across all handlers.

use std::sync::Arc;

use yipper_core::ports::YipRepository;
use yipper_infra::database::{DatabaseConfig, SqliteYipRepository, StoreError, YipStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub yips: Arc<dyn YipRepository>,
    pub store: YipStore,
    pub service_name: String,
}

impl AppState {
    /// Open (and on first launch, seed) the store, then wire the repository to it.
    ///
    /// Must finish before the server accepts requests.
    pub async fn open(
        db_config: &DatabaseConfig,
        service_name: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let store = YipStore::open(db_config).await?;
        let state = Self::new(store, service_name);
        tracing::info!("Application state initialized");
        Ok(state)
    }

    pub fn new(store: YipStore, service_name: impl Into<String>) -> Self {
        Self {
            yips: Arc::new(SqliteYipRepository::new(&store)),
            store,
            service_name: service_name.into(),
        }
    }
}
