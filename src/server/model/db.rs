//! Database model type aliases.
//!
//! Convenient aliases for SeaORM entity models used throughout the application, so type
//! signatures don't need to reach into the generated `entity` crate directly.

/// Type alias for the ship database model.
///
/// # Fields (from `entity::ship::Model`)
/// - `id` - Primary key, server-assigned
/// - `name` - Ship name, 1 to 50 characters
/// - `planet` - Home planet, 1 to 50 characters
/// - `category` - Class of the ship, see [`entity::ship::ShipCategory`]
/// - `production_date` - Naive UTC timestamp the ship was produced at
/// - `is_used` - Whether the ship has been used
/// - `speed` - Speed within `0.01..=0.99`
/// - `crew_size` - Crew size within `1..=9999`
/// - `rating` - Derived rating, see [`crate::server::util::rating::ship_rating`]
pub type ShipModel = entity::ship::Model;
