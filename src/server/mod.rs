//! Server application core modules.
//!
//! This module contains the backend of the Hangar ship registry: configuration, HTTP routing
//! and handlers, ship validation and rating rules, and persistence through SeaORM.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
