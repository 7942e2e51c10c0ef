//! REST API exposure for the fleet service
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`.

pub mod handlers;

use super::super::host::ServerHost;
use crate::server::router::build_ship_routes;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use handlers::ShipAppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub use handlers::{count_ships, create_ship, delete_ship, get_ship, list_ships, update_ship};

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// The router serves the health check routes, the ship routes and any
    /// custom routes given by the caller.
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let state = ShipAppState {
            service: host.service.clone(),
        };

        let mut app = Self::health_routes().merge(build_ship_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "fleet"
        }))
    }
}
