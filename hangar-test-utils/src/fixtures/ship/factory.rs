//! Factory functions for generating ship values without database interaction.

use chrono::{NaiveDate, NaiveDateTime};

/// Noon on June 15th of `year`, UTC
///
/// # Panics
/// If `year` is outside the range chrono can represent.
pub fn production_date(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 6, 15)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("production year should be representable")
}
