//! Declarative test builder.
//!
//! Builder methods only queue work, tables and fixtures are created when `build()` is called.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, fixtures::ship::ShipFixture, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create the test context.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    ships: Vec<ShipFixture>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            ships: Vec::new(),
        }
    }

    /// Add the ship table to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_ship_table(self) -> Self {
        self.with_table(entity::prelude::Ship)
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a ship into the database during `build()`.
    ///
    /// Ships are inserted in the order they are queued, so IDs ascend in that order.
    ///
    /// # Arguments
    /// - `ship` - Field values of the ship to insert
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_ship(mut self, ship: ShipFixture) -> Self {
        self.ships.push(ship);
        self
    }

    /// Insert several ships into the database during `build()`.
    pub fn with_ships(mut self, ships: impl IntoIterator<Item = ShipFixture>) -> Self {
        self.ships.extend(ships);
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        setup.with_tables(self.tables).await?;

        for ship in self.ships {
            setup.ship().insert_ship(ship).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
