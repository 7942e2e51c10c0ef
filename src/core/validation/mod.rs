//! Validation of ship payloads
//!
//! [`validate`] turns a [`ShipDraft`] into a [`CheckedShip`] or rejects it
//! with every violated rule. Rules are checked in a fixed order (name,
//! planet, shipType, prodDate, speed, crewSize), so the reported list is
//! deterministic. A [`CheckedShip`] is the only way to build a stored
//! [`Ship`], and building one always recomputes the rating.

pub mod extractor;
pub mod validators;

pub use extractor::Payload;

use chrono::{DateTime, Datelike, Utc};

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::rating::{self, CURRENT_YEAR};
use crate::core::ship::{Ship, ShipDraft, ShipType};
use validators::{decimal_range, int_range, required, string_length, year_range};

pub const NAME_MAX_LEN: usize = 50;
pub const PLANET_MAX_LEN: usize = 50;
pub const MIN_PROD_YEAR: i32 = 2800;
pub const MAX_PROD_YEAR: i32 = CURRENT_YEAR;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;
pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;

/// A payload that passed every rule
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    /// Production year, read from `prod_date` in UTC
    pub year: i32,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
}

impl CheckedShip {
    /// Rating derived from speed, usage and production year
    pub fn rating(&self) -> f64 {
        rating::rating(self.speed, self.is_used, self.year)
    }

    /// Build the record stored under `id`
    pub fn into_ship(self, id: i64) -> Ship {
        let rating = self.rating();
        Ship {
            id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating,
        }
    }
}

/// Collects rule violations in the order they are checked
#[derive(Default)]
struct Violations(Vec<FieldValidationError>);

impl Violations {
    fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.0.push(FieldValidationError {
                field: field.to_string(),
                message,
            });
        }
    }

    fn present<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        match required(field, value) {
            Ok(value) => Some(value),
            Err(message) => {
                self.check(field, Err(message));
                None
            }
        }
    }
}

/// Check a candidate record against every field rule
///
/// `isUsed` may be absent and defaults to `false`.
pub fn validate(draft: &ShipDraft) -> Result<CheckedShip, ValidationError> {
    let name_len = string_length(1, NAME_MAX_LEN);
    let planet_len = string_length(1, PLANET_MAX_LEN);
    let prod_year = year_range(MIN_PROD_YEAR, MAX_PROD_YEAR);
    let speed_range = decimal_range(MIN_SPEED, MAX_SPEED);
    let crew_range = int_range(i64::from(MIN_CREW_SIZE), i64::from(MAX_CREW_SIZE));

    let mut violations = Violations::default();

    let name = violations.present("name", draft.name.clone());
    if let Some(name) = &name {
        violations.check("name", name_len("name", name));
    }

    let planet = violations.present("planet", draft.planet.clone());
    if let Some(planet) = &planet {
        violations.check("planet", planet_len("planet", planet));
    }

    let ship_type = violations.present("shipType", draft.ship_type);

    let prod_date = violations.present("prodDate", draft.prod_date);
    if let Some(date) = &prod_date {
        violations.check("prodDate", prod_year("prodDate", date));
    }
    let year = prod_date.map(|date| date.year());

    let speed = violations.present("speed", draft.speed);
    if let Some(speed) = speed {
        violations.check("speed", speed_range("speed", speed));
    }

    let crew_size = violations.present("crewSize", draft.crew_size);
    if let Some(crew_size) = crew_size {
        violations.check("crewSize", crew_range("crewSize", i64::from(crew_size)));
    }

    match (name, planet, ship_type, prod_date, year, speed, crew_size) {
        (
            Some(name),
            Some(planet),
            Some(ship_type),
            Some(prod_date),
            Some(year),
            Some(speed),
            Some(crew_size),
        ) if violations.0.is_empty() => Ok(CheckedShip {
            name,
            planet,
            ship_type,
            prod_date,
            year,
            is_used: draft.is_used.unwrap_or(false),
            speed,
            crew_size,
        }),
        _ => Err(ValidationError::FieldErrors(violations.0)),
    }
}
