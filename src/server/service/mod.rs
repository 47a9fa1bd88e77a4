//! Service layer for business logic and orchestration.
//!
//! Services validate client input, apply derived-field rules such as the ship rating, and
//! coordinate repository calls, returning domain errors the controllers map to responses.

pub mod ship;
