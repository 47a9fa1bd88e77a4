//! Hangar: a registry service for interstellar ship records.
//!
//! The crate is split into the wire-level [`model`] types shared with API consumers and the
//! [`server`] modules implementing routing, validation, persistence, and configuration.

pub mod model;
pub mod server;
