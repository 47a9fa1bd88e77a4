//! Time and date calculation utilities.
//!
//! Production dates travel over the wire as epoch milliseconds and are stored as naive UTC
//! timestamps. This module converts between the two and provides the calendar arithmetic
//! used by validation and the `before` filter.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta};

/// First production year accepted for a ship.
pub const ERA_START_YEAR: i32 = 2800;

/// Current year of the registry's calendar, also the last accepted production year.
///
/// Ratings are calculated relative to this year, see [`crate::server::util::rating`].
pub const CURRENT_YEAR: i32 = 3019;

/// Converts epoch milliseconds into a naive UTC timestamp.
///
/// # Returns
/// - `Some(NaiveDateTime)` - The UTC timestamp for the provided milliseconds
/// - `None` - The value is outside of the range chrono can represent
pub fn from_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|date| date.naive_utc())
}

/// Converts a naive UTC timestamp into epoch milliseconds.
pub fn to_millis(date: &NaiveDateTime) -> i64 {
    date.and_utc().timestamp_millis()
}

/// Calculates the last instant (millisecond precision) of the year preceding `date`'s year.
///
/// Used to turn an exclusive "produced before year Y" bound into an inclusive upper bound that
/// excludes every instant of year Y.
///
/// # Returns
/// - `Some(NaiveDateTime)` - `(Y - 1)-12-31 23:59:59.999` where `Y` is the year of `date`
/// - `None` - The resulting timestamp falls outside of chrono's supported range
///
/// # Example
/// ```ignore
/// // 3015-07-04 12:00:00 => 3014-12-31 23:59:59.999
/// let bound = last_instant_before_year(&date).unwrap();
/// ```
pub fn last_instant_before_year(date: &NaiveDateTime) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_sub_signed(TimeDelta::milliseconds(1))
}
