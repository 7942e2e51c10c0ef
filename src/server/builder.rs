//! ServerBuilder for fluent API to build the fleet HTTP server

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::FleetConfig;
use crate::core::store::ShipStore;
use crate::storage::InMemoryShipStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the fleet HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(FleetConfig::from_yaml_file("fleet.yaml")?)
///     .with_store(InMemoryShipStore::new())
///     .serve("127.0.0.1:8080")
///     .await?;
/// ```
pub struct ServerBuilder {
    config: FleetConfig,
    store: Option<Arc<dyn ShipStore>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: FleetConfig::default(),
            store: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: FleetConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the ship store (defaults to an empty `InMemoryShipStore`)
    pub fn with_store(mut self, store: impl ShipStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared ship store
    pub fn with_shared_store(mut self, store: Arc<dyn ShipStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    ///
    /// Seed ships are not created here; call [`ServerHost::seed`] or use
    /// [`serve`](Self::serve).
    pub fn build_host(&mut self) -> Result<ServerHost> {
        self.config.validate()?;

        let store = self
            .store
            .take()
            .unwrap_or_else(|| Arc::new(InMemoryShipStore::new()));

        Ok(ServerHost::new(self.config.clone(), store))
    }

    /// Build the final REST router without seeding
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Seed the store, then serve until Ctrl+C or SIGTERM
    pub async fn serve(mut self, addr: &str) -> Result<()> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = self.build_host()?;
        host.seed().await?;

        let app = RestExposure::build_router(Arc::new(host), custom_routes)?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
