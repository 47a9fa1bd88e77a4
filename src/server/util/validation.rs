//! Field-level validation rules for ship records.
//!
//! Every value a client supplies is wrapped in a [`FieldValue`] describing its kind, which
//! determines the rule it is checked against.

use chrono::{Datelike, NaiveDateTime};
use entity::ship::ShipCategory;

use crate::server::util::time::{CURRENT_YEAR, ERA_START_YEAR};

/// Maximum length, in characters, of text fields such as name and planet.
pub const MAX_TEXT_LENGTH: usize = 50;

/// Inclusive bounds for ship speed.
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;

/// Inclusive bounds for crew size.
pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;

/// A single client-supplied value tagged with the kind of field it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Category(ShipCategory),
    Timestamp(&'a NaiveDateTime),
    Flag(bool),
    Speed(f64),
    CrewSize(i32),
}

impl FieldValue<'_> {
    /// Checks the value against the rule for its kind.
    ///
    /// | kind | rule |
    /// |---|---|
    /// | text | non-empty, at most [`MAX_TEXT_LENGTH`] characters |
    /// | category, flag | always valid |
    /// | timestamp | production year within [`ERA_START_YEAR`]..=[`CURRENT_YEAR`] |
    /// | speed | [`MIN_SPEED`]..=[`MAX_SPEED`] |
    /// | crew size | [`MIN_CREW_SIZE`]..=[`MAX_CREW_SIZE`] |
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Text(text) => is_valid_text(text),
            Self::Category(_) | Self::Flag(_) => true,
            Self::Timestamp(date) => is_valid_production_date(date),
            Self::Speed(speed) => is_valid_speed(speed),
            Self::CrewSize(crew_size) => is_valid_crew_size(crew_size),
        }
    }
}

/// Checks that a name or planet is non-empty and at most [`MAX_TEXT_LENGTH`] characters.
pub fn is_valid_text(text: &str) -> bool {
    !text.is_empty() && text.chars().count() <= MAX_TEXT_LENGTH
}

/// Checks that a production date falls within the era.
pub fn is_valid_production_date(date: &NaiveDateTime) -> bool {
    (ERA_START_YEAR..=CURRENT_YEAR).contains(&date.year())
}

/// Checks that a speed is within [`MIN_SPEED`]..=[`MAX_SPEED`], NaN is rejected.
pub fn is_valid_speed(speed: f64) -> bool {
    (MIN_SPEED..=MAX_SPEED).contains(&speed)
}

/// Checks that a crew size is within [`MIN_CREW_SIZE`]..=[`MAX_CREW_SIZE`].
pub fn is_valid_crew_size(crew_size: i32) -> bool {
    (MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&crew_size)
}
