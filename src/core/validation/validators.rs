//! Reusable field validators
//!
//! Each builder returns a closure taking the field name and its value, so
//! rules can be declared once and applied to several fields.

use chrono::{DateTime, Datelike, Utc};

/// Validator: field must be present
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, String> {
    value.ok_or_else(|| format!("'{}' is required", field))
}

/// Validator: string length (in characters) must be within range
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let len = value.chars().count();
        if len < min {
            Err(format!(
                "'{}' must have at least {} characters (got {})",
                field, min, len
            ))
        } else if len > max {
            Err(format!(
                "'{}' must not exceed {} characters (got {})",
                field, max, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: integer must be within the inclusive range
pub fn int_range(
    min: i64,
    max: i64,
) -> impl Fn(&str, i64) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: i64| {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(format!(
                "'{}' must be between {} and {} (got {})",
                field, min, max, value
            ))
        }
    }
}

/// Validator: number must be finite and within the inclusive range
pub fn decimal_range(
    min: f64,
    max: f64,
) -> impl Fn(&str, f64) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: f64| {
        if value.is_finite() && value >= min && value <= max {
            Ok(())
        } else {
            Err(format!(
                "'{}' must be between {} and {} (got {})",
                field, min, max, value
            ))
        }
    }
}

/// Validator: calendar year of a UTC timestamp must be within the inclusive range
pub fn year_range(
    min: i32,
    max: i32,
) -> impl Fn(&str, &DateTime<Utc>) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &DateTime<Utc>| {
        let year = value.year();
        if (min..=max).contains(&year) {
            Ok(())
        } else {
            Err(format!(
                "'{}' year must be between {} and {} (got {})",
                field, min, max, year
            ))
        }
    }
}
