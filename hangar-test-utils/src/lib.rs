//! Test utilities for the hangar ship registry.
//!
//! Tests run in two phases. Setup is declared through [`TestBuilder`], which creates tables in
//! an in-memory SQLite database and inserts ship fixtures. The resulting [`TestContext`] is then
//! used during the test body to reach the database, insert further fixtures, or build the
//! application state.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::ship::{factory, ShipFixture},
        TestBuilder, TestContext, TestError,
    };
}
