//! HTTP handlers for ship operations
//!
//! Handlers only move data between axum extractors and the record service;
//! every decision about ids, parameters and payloads is made by
//! [`ShipService`].

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::core::error::FleetError;
use crate::core::filter::first_values;
use crate::core::service::ShipService;
use crate::core::ship::{Ship, ShipDraft};
use crate::core::validation::Payload;

/// Application state shared across ship handlers
#[derive(Clone)]
pub struct ShipAppState {
    pub service: ShipService,
}

/// List ships
///
/// GET /rest/ships
pub async fn list_ships(
    State(state): State<ShipAppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Ship>>, FleetError> {
    let ships = state.service.list(&first_values(pairs)).await?;
    Ok(Json(ships))
}

/// Count ships matching the filter parameters
///
/// GET /rest/ships/count
pub async fn count_ships(
    State(state): State<ShipAppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<usize>, FleetError> {
    let count = state.service.count(&first_values(pairs)).await?;
    Ok(Json(count))
}

/// GET /rest/ships/{id}
pub async fn get_ship(
    State(state): State<ShipAppState>,
    Path(id): Path<String>,
) -> Result<Json<Ship>, FleetError> {
    let ship = state.service.get(&id).await?;
    Ok(Json(ship))
}

/// POST /rest/ships
pub async fn create_ship(
    State(state): State<ShipAppState>,
    Payload(draft): Payload<ShipDraft>,
) -> Result<Json<Ship>, FleetError> {
    let ship = state.service.create(draft).await?;
    Ok(Json(ship))
}

/// Partially update a ship
///
/// POST /rest/ships/{id}
pub async fn update_ship(
    State(state): State<ShipAppState>,
    Path(id): Path<String>,
    Payload(patch): Payload<ShipDraft>,
) -> Result<Json<Ship>, FleetError> {
    let ship = state.service.update(&id, patch).await?;
    Ok(Json(ship))
}

/// DELETE /rest/ships/{id}
pub async fn delete_ship(
    State(state): State<ShipAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, FleetError> {
    state.service.delete(&id).await?;
    Ok(StatusCode::OK)
}
