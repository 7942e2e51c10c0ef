//! Ship rating calculation
//!
//! ```text
//! rating = round_half_up(80 * speed * k / (3019 - year + 1), 2)
//! k      = 0.5 if used, 1.0 otherwise
//! ```
//!
//! The quotient is evaluated in `f64` in exactly that order, and the exact
//! binary value of the result is rounded with `rust_decimal`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Last production year a ship may have; also the rating reference year
pub const CURRENT_YEAR: i32 = 3019;

/// Fractional digits kept in a rating
pub const RATING_SCALE: u32 = 2;

/// Compute the rating of a ship
///
/// `year` must not exceed [`CURRENT_YEAR`]; the validator guarantees this for
/// every stored record, so the denominator is at least 1.
pub fn rating(speed: f64, is_used: bool, year: i32) -> f64 {
    let k = if is_used { 0.5 } else { 1.0 };
    let age = f64::from(CURRENT_YEAR - year + 1);
    round_half_up(80.0 * speed * k / age, RATING_SCALE)
}

/// Round half-up (away from zero) at `scale` decimal places
fn round_half_up(value: f64, scale: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .or_else(|| Decimal::from_f64(value))
        .map(|d| d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero))
        // back through the decimal string: nearest double, correctly rounded
        .and_then(|d| d.to_string().parse::<f64>().ok().or_else(|| d.to_f64()))
        .unwrap_or(value)
}
