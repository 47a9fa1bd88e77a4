//! Ship fixtures.
//!
//! [`ShipFixture`] describes a ship row with standard test values that individual tests
//! override where they matter. The defaults form a valid ship whose stored rating matches the
//! rating the server would calculate.

pub mod data;
pub mod factory;

use chrono::NaiveDateTime;
use entity::ship::ShipCategory;

use crate::TestContext;

impl TestContext {
    /// Ship fixture operations on this context's database
    pub fn ship<'a>(&'a mut self) -> ShipFixtures<'a> {
        ShipFixtures { setup: self }
    }
}

/// Inserts ship fixtures, see [`data`]
pub struct ShipFixtures<'a> {
    setup: &'a mut TestContext,
}

/// Field values of a ship to insert
#[derive(Clone, Debug)]
pub struct ShipFixture {
    pub name: String,
    pub planet: String,
    pub category: ShipCategory,
    pub production_date: NaiveDateTime,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl ShipFixture {
    /// A new transport ship from Earth produced in 3014 with speed 0.5 and a crew of 10
    pub fn new() -> Self {
        Self {
            name: "Falcon".to_string(),
            planet: "Earth".to_string(),
            category: ShipCategory::Transport,
            production_date: factory::production_date(3014),
            is_used: false,
            speed: 0.5,
            crew_size: 10,
            rating: 6.67,
        }
    }

    /// Sets the ship name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the home planet
    pub fn planet(mut self, planet: impl Into<String>) -> Self {
        self.planet = planet.into();
        self
    }

    /// Sets the ship category
    pub fn category(mut self, category: ShipCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the production date to mid-year of `year`, see [`factory::production_date`]
    pub fn production_year(mut self, year: i32) -> Self {
        self.production_date = factory::production_date(year);
        self
    }

    /// Sets the exact production date
    pub fn production_date(mut self, production_date: NaiveDateTime) -> Self {
        self.production_date = production_date;
        self
    }

    /// Marks the ship as used or new
    pub fn is_used(mut self, is_used: bool) -> Self {
        self.is_used = is_used;
        self
    }

    /// Sets the ship speed
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the crew size
    pub fn crew_size(mut self, crew_size: i32) -> Self {
        self.crew_size = crew_size;
        self
    }

    /// Overrides the stored rating, which is not recalculated from the other fields
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}

impl Default for ShipFixture {
    fn default() -> Self {
        Self::new()
    }
}
