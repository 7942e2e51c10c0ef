//! The ship entity and its request payload
//!
//! [`Ship`] is the persisted record. [`ShipDraft`] is the shape of every
//! incoming payload: all fields optional, so the same type serves a full
//! create body and a partial update body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::field::{FieldValue, ShipField};

/// Kind of ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    /// All variants, in declaration order
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    /// Wire name of this ship type
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`ShipType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShipType(pub String);

impl fmt::Display for UnknownShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown ship type '{}' (expected one of TRANSPORT, MILITARY, MERCHANT)",
            self.0
        )
    }
}

impl std::error::Error for UnknownShipType {}

impl FromStr for ShipType {
    type Err = UnknownShipType;

    /// Case-sensitive lookup by wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRANSPORT" => Ok(ShipType::Transport),
            "MILITARY" => Ok(ShipType::Military),
            "MERCHANT" => Ok(ShipType::Merchant),
            other => Err(UnknownShipType(other.to_string())),
        }
    }
}

/// A stored ship record
///
/// `rating` is owned by the service: it is recomputed on every create and
/// update and never taken from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: i64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    /// Serialized as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    #[serde(rename = "isUsed")]
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl Ship {
    /// Typed value of a field, used by predicates and ordering
    pub fn field_value(&self, field: ShipField) -> FieldValue {
        match field {
            ShipField::Id => FieldValue::Integer(self.id),
            ShipField::Name => FieldValue::String(self.name.clone()),
            ShipField::Planet => FieldValue::String(self.planet.clone()),
            ShipField::ShipType => FieldValue::ShipType(self.ship_type),
            ShipField::ProdDate => FieldValue::DateTime(self.prod_date),
            ShipField::IsUsed => FieldValue::Boolean(self.is_used),
            ShipField::Speed => FieldValue::Float(self.speed),
            ShipField::CrewSize => FieldValue::Integer(i64::from(self.crew_size)),
            ShipField::Rating => FieldValue::Float(self.rating),
        }
    }
}

/// Incoming ship payload
///
/// Absent and `null` fields both deserialize to `None`. Any `id` or `rating`
/// in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_type: Option<ShipType>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub prod_date: Option<DateTime<Utc>>,
    #[serde(default, rename = "isUsed", skip_serializing_if = "Option::is_none")]
    pub is_used: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crew_size: Option<i32>,
}

impl ShipDraft {
    /// Overlay the present fields of `patch` onto this draft
    ///
    /// Fields absent from `patch` keep their current value. No validation
    /// happens here.
    pub fn merge(mut self, patch: ShipDraft) -> Self {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.planet.is_some() {
            self.planet = patch.planet;
        }
        if patch.ship_type.is_some() {
            self.ship_type = patch.ship_type;
        }
        if patch.prod_date.is_some() {
            self.prod_date = patch.prod_date;
        }
        if patch.is_used.is_some() {
            self.is_used = patch.is_used;
        }
        if patch.speed.is_some() {
            self.speed = patch.speed;
        }
        if patch.crew_size.is_some() {
            self.crew_size = patch.crew_size;
        }
        self
    }
}

impl From<Ship> for ShipDraft {
    fn from(ship: Ship) -> Self {
        Self {
            name: Some(ship.name),
            planet: Some(ship.planet),
            ship_type: Some(ship.ship_type),
            prod_date: Some(ship.prod_date),
            is_used: Some(ship.is_used),
            speed: Some(ship.speed),
            crew_size: Some(ship.crew_size),
        }
    }
}
