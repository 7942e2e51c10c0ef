//! Server host for transport-agnostic API exposure
//!
//! The host holds everything an exposure needs to serve the record
//! operations: the configuration and the record service. It knows nothing
//! about HTTP.

use crate::config::FleetConfig;
use crate::core::error::FleetResult;
use crate::core::service::ShipService;
use crate::core::ship::Ship;
use crate::core::store::ShipStore;
use std::sync::Arc;

/// Host context containing all service state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::new(config, Arc::new(InMemoryShipStore::new()));
/// host.seed().await?;
///
/// let app = RestExposure::build_router(Arc::new(host), Vec::new())?;
/// ```
pub struct ServerHost {
    pub config: Arc<FleetConfig>,

    /// Record service shared by every handler
    pub service: ShipService,
}

impl ServerHost {
    pub fn new(config: FleetConfig, store: Arc<dyn ShipStore>) -> Self {
        let service = ShipService::new(store, config.paging.default_page_size);
        Self {
            config: Arc::new(config),
            service,
        }
    }

    /// Create the configured seed ships through the normal create path
    pub async fn seed(&self) -> FleetResult<Vec<Ship>> {
        if self.config.seed.is_empty() {
            return Ok(Vec::new());
        }
        self.service.seed(self.config.seed.clone()).await
    }
}
