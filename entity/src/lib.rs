//! SeaORM entities for the hangar registry.

pub mod prelude;

pub mod ship;
