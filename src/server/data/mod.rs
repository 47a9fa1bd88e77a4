//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They accept any
//! `ConnectionTrait` so services can run them against a plain connection or a transaction.

pub mod ship;
