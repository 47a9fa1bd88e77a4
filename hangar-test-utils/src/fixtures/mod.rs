//! Database fixtures inserted during test setup or from within a test body.

pub mod ship;
