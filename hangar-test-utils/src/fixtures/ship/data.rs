use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::ship::ShipFixture};

use super::ShipFixtures;

impl<'a> ShipFixtures<'a> {
    /// Inserts a ship row, returning it with its assigned ID
    pub async fn insert_ship(&self, ship: ShipFixture) -> Result<entity::ship::Model, TestError> {
        Ok(
            entity::prelude::Ship::insert(entity::ship::ActiveModel {
                name: ActiveValue::Set(ship.name),
                planet: ActiveValue::Set(ship.planet),
                category: ActiveValue::Set(ship.category),
                production_date: ActiveValue::Set(ship.production_date),
                is_used: ActiveValue::Set(ship.is_used),
                speed: ActiveValue::Set(ship.speed),
                crew_size: ActiveValue::Set(ship.crew_size),
                rating: ActiveValue::Set(ship.rating),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
