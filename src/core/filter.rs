//! Filter compilation
//!
//! A [`ShipFilter`] is a conjunction of typed [`Predicate`]s. It is compiled
//! from the raw query-parameter mapping through the [`FILTER_PARAMS`] table,
//! which binds each recognized parameter to a ship field, a comparator and
//! the type its value must parse as.
//!
//! ```text
//! ?name=Star&minSpeed=0.5&shipType=MILITARY
//!   -> name contains "Star" AND speed >= 0.5 AND shipType == MILITARY
//! ```
//!
//! Unknown parameters are ignored. A recognized parameter whose value does
//! not parse is an error, never "no filter".

use chrono::DateTime;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::error::{FleetResult, RequestError};
use crate::core::field::{FieldValue, ShipField};
use crate::core::ship::{Ship, ShipType};

/// Raw query parameters, as received from the transport
pub type ParamMap = HashMap<String, String>;

/// Collect raw query pairs, keeping the first value of a repeated parameter
pub fn first_values<I>(pairs: I) -> ParamMap
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut params = ParamMap::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

/// How a predicate compares a field with its operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Case-sensitive substring
    Contains,
    Equals,
    /// Inclusive lower bound
    AtLeast,
    /// Inclusive upper bound
    AtMost,
}

/// Type a parameter value must parse as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    ShipType,
    /// Epoch milliseconds
    Timestamp,
    Boolean,
    Decimal,
    Integer,
}

/// One row of the parameter table
#[derive(Debug, Clone, Copy)]
pub struct FilterParam {
    pub name: &'static str,
    pub field: ShipField,
    pub comparator: Comparator,
    pub kind: ValueKind,
}

const fn param(
    name: &'static str,
    field: ShipField,
    comparator: Comparator,
    kind: ValueKind,
) -> FilterParam {
    FilterParam {
        name,
        field,
        comparator,
        kind,
    }
}

/// Every recognized filter parameter, in compilation order
pub const FILTER_PARAMS: &[FilterParam] = &[
    param("name", ShipField::Name, Comparator::Contains, ValueKind::Text),
    param("planet", ShipField::Planet, Comparator::Contains, ValueKind::Text),
    param("shipType", ShipField::ShipType, Comparator::Equals, ValueKind::ShipType),
    param("after", ShipField::ProdDate, Comparator::AtLeast, ValueKind::Timestamp),
    param("before", ShipField::ProdDate, Comparator::AtMost, ValueKind::Timestamp),
    param("isUsed", ShipField::IsUsed, Comparator::Equals, ValueKind::Boolean),
    param("minSpeed", ShipField::Speed, Comparator::AtLeast, ValueKind::Decimal),
    param("maxSpeed", ShipField::Speed, Comparator::AtMost, ValueKind::Decimal),
    param("minCrewSize", ShipField::CrewSize, Comparator::AtLeast, ValueKind::Integer),
    param("maxCrewSize", ShipField::CrewSize, Comparator::AtMost, ValueKind::Integer),
    param("minRating", ShipField::Rating, Comparator::AtLeast, ValueKind::Decimal),
    param("maxRating", ShipField::Rating, Comparator::AtMost, ValueKind::Decimal),
];

/// A single condition over one ship field
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: ShipField,
    pub comparator: Comparator,
    pub operand: FieldValue,
}

impl Predicate {
    pub fn new(field: ShipField, comparator: Comparator, operand: FieldValue) -> Self {
        Self {
            field,
            comparator,
            operand,
        }
    }

    /// Evaluate against a ship
    pub fn matches(&self, ship: &Ship) -> bool {
        let value = ship.field_value(self.field);
        match self.comparator {
            Comparator::Contains => self
                .operand
                .as_string()
                .is_some_and(|needle| value.contains(needle)),
            Comparator::Equals => value.compare(&self.operand) == Some(Ordering::Equal),
            Comparator::AtLeast => matches!(
                value.compare(&self.operand),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Comparator::AtMost => matches!(
                value.compare(&self.operand),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }
}

/// Conjunction of predicates; empty matches every ship
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    predicates: Vec<Predicate>,
}

impl ShipFilter {
    /// The always-true filter
    pub fn all() -> Self {
        Self::default()
    }

    /// Append a predicate to the conjunction
    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when every predicate holds
    pub fn matches(&self, ship: &Ship) -> bool {
        self.predicates.iter().all(|p| p.matches(ship))
    }

    /// Compile the recognized parameters of `params` into a filter
    pub fn compile(params: &ParamMap) -> FleetResult<Self> {
        let mut filter = Self::all();
        for entry in FILTER_PARAMS {
            if let Some(raw) = params.get(entry.name) {
                let operand = parse_operand(entry, raw)?;
                filter = filter.and(Predicate::new(entry.field, entry.comparator, operand));
            }
        }
        Ok(filter)
    }
}

fn parse_operand(entry: &FilterParam, raw: &str) -> FleetResult<FieldValue> {
    let invalid = |message: &str| RequestError::invalid_parameter(entry.name, raw, message);

    let value = match entry.kind {
        ValueKind::Text => FieldValue::String(raw.to_string()),
        ValueKind::ShipType => match raw.parse::<ShipType>() {
            Ok(ship_type) => FieldValue::ShipType(ship_type),
            Err(e) => return Err(invalid(&e.to_string()).into()),
        },
        ValueKind::Timestamp => {
            let millis = raw
                .parse::<i64>()
                .map_err(|_| invalid("expected epoch milliseconds"))?;
            let date = DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| invalid("timestamp out of range"))?;
            FieldValue::DateTime(date)
        }
        ValueKind::Boolean => {
            if raw.eq_ignore_ascii_case("true") {
                FieldValue::Boolean(true)
            } else if raw.eq_ignore_ascii_case("false") {
                FieldValue::Boolean(false)
            } else {
                return Err(invalid("expected true or false").into());
            }
        }
        ValueKind::Decimal => {
            let number = raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| invalid("expected a decimal number"))?;
            FieldValue::Float(number)
        }
        ValueKind::Integer => {
            let number = raw
                .parse::<i32>()
                .map_err(|_| invalid("expected an integer"))?;
            FieldValue::Integer(i64::from(number))
        }
    };
    Ok(value)
}
