//! Utility functions and helpers for server operations.
//!
//! This module provides the pure building blocks used by the ship service: time conversions
//! and calendar arithmetic, field validation rules, and the rating calculation.

pub mod rating;
pub mod time;
pub mod validation;
