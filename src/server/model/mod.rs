//! Server application models and type definitions.
//!
//! This module contains the application state shared with HTTP handlers, database model type
//! aliases, and the validated domain inputs the ship service operates on.

pub mod app;
pub mod db;
pub mod ship;
