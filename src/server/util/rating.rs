//! Ship rating calculation.
//!
//! The rating is derived entirely from a ship's speed, whether it has been used, and the year
//! it was produced. Newer, faster, unused ships rate higher.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::server::util::time::CURRENT_YEAR;

/// Multiplier applied to the rating of a used ship.
pub const USED_COEFFICIENT: f64 = 0.5;

/// Multiplier applied to the rating of a new ship.
pub const NEW_COEFFICIENT: f64 = 1.0;

/// Returns the usage coefficient for a ship.
pub fn usage_coefficient(is_used: bool) -> f64 {
    if is_used {
        USED_COEFFICIENT
    } else {
        NEW_COEFFICIENT
    }
}

/// Calculates a ship's rating.
///
/// `rating = 80 * speed * coefficient / (CURRENT_YEAR - production_year + 1)`, rounded to two
/// decimal places with ties rounding toward zero. Rounding is applied to the exact decimal
/// expansion of the computed `f64`, so `0.005` (stored slightly above the tie) rounds up.
///
/// # Arguments
/// - `speed` - Ship speed, expected within `0.01..=0.99`
/// - `is_used` - Whether the ship has been used, see [`usage_coefficient`]
/// - `production_year` - Year the ship was produced, expected no later than [`CURRENT_YEAR`]
///
/// # Example
/// ```ignore
/// assert_eq!(ship_rating(0.5, false, 3014), 6.67);
/// assert_eq!(ship_rating(0.5, true, 3014), 3.33);
/// ```
pub fn ship_rating(speed: f64, is_used: bool, production_year: i32) -> f64 {
    let age = f64::from(CURRENT_YEAR - production_year + 1);
    let rating = 80.0 * speed * usage_coefficient(is_used) / age;

    round_rating(rating)
}

/// Rounds a raw rating to two decimal places.
fn round_rating(rating: f64) -> f64 {
    Decimal::from_f64_retain(rating)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointTowardZero))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(rating)
}
