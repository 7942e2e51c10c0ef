//! Ship field names and typed field values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::ship::ShipType;

/// A filterable or sortable field of [`Ship`](crate::core::ship::Ship)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipField {
    Id,
    Name,
    Planet,
    ShipType,
    ProdDate,
    IsUsed,
    Speed,
    CrewSize,
    Rating,
}

impl ShipField {
    /// Persisted field name
    pub fn name(&self) -> &'static str {
        match self {
            ShipField::Id => "id",
            ShipField::Name => "name",
            ShipField::Planet => "planet",
            ShipField::ShipType => "shipType",
            ShipField::ProdDate => "prodDate",
            ShipField::IsUsed => "isUsed",
            ShipField::Speed => "speed",
            ShipField::CrewSize => "crewSize",
            ShipField::Rating => "rating",
        }
    }
}

/// A polymorphic field value that can hold any ship field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    ShipType(ShipType),
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Order two values of the same variant
    ///
    /// Returns `None` when the variants differ. Floats use IEEE total order.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => Some(a.cmp(b)),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (FieldValue::Float(a), FieldValue::Float(b)) => Some(a.total_cmp(b)),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            (FieldValue::ShipType(a), FieldValue::ShipType(b)) => {
                (*a == *b).then_some(Ordering::Equal)
            }
            _ => None,
        }
    }

    /// Case-sensitive substring test; false for non-string values
    pub fn contains(&self, needle: &str) -> bool {
        self.as_string().is_some_and(|s| s.contains(needle))
    }
}
