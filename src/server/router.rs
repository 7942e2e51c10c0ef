//! Router builder for ship routes

use crate::server::exposure::rest::handlers::{
    ShipAppState, count_ships, create_ship, delete_ship, get_ship, list_ships, update_ship,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Base path of the ship resource
pub const SHIPS_PATH: &str = "/rest/ships";

/// Build ship routes
///
/// - GET /rest/ships - List one page of ships
/// - POST /rest/ships - Create a ship
/// - GET /rest/ships/count - Count matching ships
/// - GET /rest/ships/{id} - Get a ship
/// - POST /rest/ships/{id} - Partially update a ship
/// - DELETE /rest/ships/{id} - Delete a ship
///
/// `/count` is a static segment and takes precedence over `{id}`.
pub fn build_ship_routes(state: ShipAppState) -> Router {
    Router::new()
        .route(SHIPS_PATH, get(list_ships).post(create_ship))
        .route(&format!("{}/count", SHIPS_PATH), get(count_ships))
        .route(
            &format!("{}/{{id}}", SHIPS_PATH),
            get(get_ship).post(update_ship).delete(delete_ship),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
