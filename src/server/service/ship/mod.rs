use chrono::Datelike;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::ship::{
        filter::ShipFilter,
        query::{ShipOrder, ShipPage},
        ShipRepository,
    },
    error::{ship::ShipError, Error},
    model::{db::ShipModel, ship::ShipFields},
    util::rating::ship_rating,
};

#[cfg(test)]
mod tests;

pub struct ShipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipService<'a> {
    /// Creates a new instance of [`ShipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of ships matching `filter`, sorted ascending by `order`
    pub async fn list(
        &self,
        filter: &ShipFilter,
        order: ShipOrder,
        page: ShipPage,
    ) -> Result<Vec<ShipModel>, Error> {
        let ship_repo = ShipRepository::new(self.db);

        Ok(ship_repo.list(filter, order, page).await?)
    }

    /// Counts every ship matching `filter`, ignoring pagination
    pub async fn count(&self, filter: &ShipFilter) -> Result<u64, Error> {
        let ship_repo = ShipRepository::new(self.db);

        Ok(ship_repo.count(filter).await?)
    }

    /// Registers a new ship, calculating its rating
    ///
    /// Every field except `is_used` is required and all are validated before anything is
    /// stored. `is_used` defaults to `false`.
    ///
    /// # Returns
    /// - `Ok(ShipModel)` - The stored ship including its ID and rating
    /// - `Err(Error::ShipError)` - A field is missing or invalid, nothing was stored
    /// - `Err(Error::DbErr)` - The database insert failed
    pub async fn create(&self, fields: ShipFields) -> Result<ShipModel, Error> {
        let ship_repo = ShipRepository::new(self.db);

        let new_ship = fields.into_new_ship()?;
        let rating = ship_rating(
            new_ship.speed,
            new_ship.is_used,
            new_ship.production_date.year(),
        );

        let ship = ship_repo.create(new_ship, rating).await?;

        tracing::info!(ship_id = %ship.id, rating = %ship.rating, "Registered new ship");

        Ok(ship)
    }

    /// Gets a ship by ID
    ///
    /// # Returns
    /// - `Ok(ShipModel)` - The stored ship
    /// - `Err(Error::ShipError(ShipError::InvalidId))` - The ID is not a positive integer
    /// - `Err(Error::ShipError(ShipError::NotFound))` - No ship exists with the ID
    pub async fn get(&self, id: i64) -> Result<ShipModel, Error> {
        let ship_id = validate_ship_id(id)?;
        let ship_repo = ShipRepository::new(self.db);

        match ship_repo.get(ship_id).await? {
            Some(ship) => Ok(ship),
            None => Err(ShipError::NotFound(id).into()),
        }
    }

    /// Applies the supplied fields to an existing ship and recalculates its rating
    ///
    /// Runs inside a transaction so the read and write see the same row. If no fields are
    /// supplied the stored ship is returned unchanged. The rating is calculated from the
    /// resulting speed, production date, and usage flag.
    ///
    /// # Returns
    /// - `Ok(ShipModel)` - The updated (or unchanged) ship
    /// - `Err(Error::ShipError)` - Invalid ID, invalid field, or no ship with the ID; nothing
    ///   was stored
    /// - `Err(Error::DbErr)` - The database read or write failed
    pub async fn update(&self, id: i64, changes: ShipFields) -> Result<ShipModel, Error> {
        let ship_id = validate_ship_id(id)?;

        let txn = self.db.begin().await?;
        let ship_repo = ShipRepository::new(&txn);

        let ship = match ship_repo.get(ship_id).await? {
            Some(ship) => ship,
            None => return Err(ShipError::NotFound(id).into()),
        };

        if changes.is_empty() {
            return Ok(ship);
        }

        changes.validate()?;

        let speed = changes.speed.unwrap_or(ship.speed);
        let is_used = changes.is_used.unwrap_or(ship.is_used);
        let production_year = changes
            .production_date
            .unwrap_or(ship.production_date)
            .year();
        let rating = ship_rating(speed, is_used, production_year);

        let ship = ship_repo.update(ship, changes, rating).await?;

        txn.commit().await?;

        tracing::debug!(ship_id = %ship.id, rating = %ship.rating, "Updated ship");

        Ok(ship)
    }

    /// Deletes a ship by ID, returning its last stored state
    ///
    /// # Returns
    /// - `Ok(ShipModel)` - The ship as it was before deletion
    /// - `Err(Error::ShipError)` - Invalid ID or no ship with the ID
    /// - `Err(Error::DbErr)` - The database read or delete failed
    pub async fn delete(&self, id: i64) -> Result<ShipModel, Error> {
        let ship_id = validate_ship_id(id)?;

        let txn = self.db.begin().await?;
        let ship_repo = ShipRepository::new(&txn);

        let ship = match ship_repo.get(ship_id).await? {
            Some(ship) => ship,
            None => return Err(ShipError::NotFound(id).into()),
        };

        ship_repo.delete(ship_id).await?;

        txn.commit().await?;

        tracing::info!(ship_id = %ship.id, "Deleted ship");

        Ok(ship)
    }
}

/// Ship IDs must be positive; IDs beyond the key range can't exist and are not found.
fn validate_ship_id(id: i64) -> Result<i32, ShipError> {
    if id <= 0 {
        return Err(ShipError::InvalidId(id));
    }

    i32::try_from(id).map_err(|_| ShipError::NotFound(id))
}
