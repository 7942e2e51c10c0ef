//! Shared test harness for ship store testing
//!
//! Provides ship and payload fixtures spanning every filterable field, plus
//! the `ship_store_tests!` macro validating any `ShipStore` implementation.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod ship_store_tests;

use chrono::{DateTime, TimeZone, Utc};

use fleet::core::rating::rating;
use fleet::core::ship::{Ship, ShipDraft, ShipType};

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Midnight UTC on January 1st of `year`
pub fn jan_first(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

/// Epoch milliseconds of January 1st of `year`, as sent on the wire
pub fn jan_first_millis(year: i32) -> i64 {
    jan_first(year).timestamp_millis()
}

// ---------------------------------------------------------------------------
// Ship fixtures
// ---------------------------------------------------------------------------

/// Build a stored-shape ship with a consistent rating and id 0
pub fn make_ship(
    name: &str,
    ship_type: ShipType,
    year: i32,
    is_used: bool,
    speed: f64,
    crew_size: i32,
) -> Ship {
    Ship {
        id: 0,
        name: name.to_string(),
        planet: "Earth".to_string(),
        ship_type,
        prod_date: jan_first(year),
        is_used,
        speed,
        crew_size,
        rating: rating(speed, is_used, year),
    }
}

/// Move a fixture ship to another planet
pub fn on_planet(ship: Ship, planet: &str) -> Ship {
    Ship {
        planet: planet.to_string(),
        ..ship
    }
}

/// Five ships with distinct speeds, years and crew sizes
///
/// | name     | planet      | type      | year | used  | speed | crew | rating |
/// |----------|-------------|-----------|------|-------|-------|------|--------|
/// | Aurora   | Earth       | TRANSPORT | 2900 | false | 0.50  | 100  | 0.33   |
/// | Bastion  | Mars        | MILITARY  | 3000 | true  | 0.90  | 500  | 1.8    |
/// | Comet    | Venus       | MERCHANT  | 2850 | false | 0.20  | 20   | 0.09   |
/// | Drifter  | Mars Colony | TRANSPORT | 3010 | true  | 0.50  | 5    | 2.0    |
/// | Eclipse  | Earth       | MILITARY  | 2950 | false | 0.75  | 1200 | 0.86   |
pub fn fleet_fixture() -> Vec<Ship> {
    vec![
        make_ship("Aurora", ShipType::Transport, 2900, false, 0.5, 100),
        on_planet(make_ship("Bastion", ShipType::Military, 3000, true, 0.9, 500), "Mars"),
        on_planet(make_ship("Comet", ShipType::Merchant, 2850, false, 0.2, 20), "Venus"),
        on_planet(make_ship("Drifter", ShipType::Transport, 3010, true, 0.5, 5), "Mars Colony"),
        make_ship("Eclipse", ShipType::Military, 2950, false, 0.75, 1200),
    ]
}

// ---------------------------------------------------------------------------
// Payload fixtures
// ---------------------------------------------------------------------------

/// A complete, valid create payload
pub fn valid_draft(name: &str) -> ShipDraft {
    ShipDraft {
        name: Some(name.to_string()),
        planet: Some("Mars".to_string()),
        ship_type: Some(ShipType::Transport),
        prod_date: Some(jan_first(2800)),
        is_used: Some(false),
        speed: Some(0.5),
        crew_size: Some(10),
    }
}

/// Payloads for every ship of [`fleet_fixture`], in the same order
pub fn fleet_drafts() -> Vec<ShipDraft> {
    fleet_fixture().into_iter().map(ShipDraft::from).collect()
}

/// The same payload as JSON, the way clients send it
pub fn valid_draft_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "planet": "Mars",
        "shipType": "TRANSPORT",
        "prodDate": jan_first_millis(2800),
        "isUsed": false,
        "speed": 0.5,
        "crewSize": 10
    })
}
