pub mod filter;
pub mod query;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::ship::{
        filter::ShipFilter,
        query::{ShipOrder, ShipPage},
    },
    model::ship::{NewShip, ShipFields},
};

pub struct ShipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipRepository<'a, C> {
    /// Creates a new instance of [`ShipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new ship with its precalculated rating
    pub async fn create(&self, ship: NewShip, rating: f64) -> Result<entity::ship::Model, DbErr> {
        let ship = entity::ship::ActiveModel {
            name: ActiveValue::Set(ship.name),
            planet: ActiveValue::Set(ship.planet),
            category: ActiveValue::Set(ship.category),
            production_date: ActiveValue::Set(ship.production_date),
            is_used: ActiveValue::Set(ship.is_used),
            speed: ActiveValue::Set(ship.speed),
            crew_size: ActiveValue::Set(ship.crew_size),
            rating: ActiveValue::Set(rating),
            ..Default::default()
        };

        ship.insert(self.db).await
    }

    pub async fn get(&self, ship_id: i32) -> Result<Option<entity::ship::Model>, DbErr> {
        entity::prelude::Ship::find_by_id(ship_id).one(self.db).await
    }

    /// Gets one page of ships matching `filter`, sorted ascending by `order`
    ///
    /// Rows with equal sort values are ordered by ID so pages never overlap.
    pub async fn list(
        &self,
        filter: &ShipFilter,
        order: ShipOrder,
        page: ShipPage,
    ) -> Result<Vec<entity::ship::Model>, DbErr> {
        let mut query = entity::prelude::Ship::find()
            .filter(filter.condition(self.db.get_database_backend()))
            .order_by_asc(order.column());

        if order != ShipOrder::Id {
            query = query.order_by_asc(entity::ship::Column::Id);
        }

        query
            .offset(page.offset())
            .limit(page.size)
            .all(self.db)
            .await
    }

    /// Counts every ship matching `filter`
    pub async fn count(&self, filter: &ShipFilter) -> Result<u64, DbErr> {
        entity::prelude::Ship::find()
            .filter(filter.condition(self.db.get_database_backend()))
            .count(self.db)
            .await
    }

    /// Overwrites the supplied fields of an existing ship and stores its new rating
    ///
    /// Fields left as `None` in `changes` keep their stored value.
    pub async fn update(
        &self,
        ship: entity::ship::Model,
        changes: ShipFields,
        rating: f64,
    ) -> Result<entity::ship::Model, DbErr> {
        let mut ship_am = ship.into_active_model();

        if let Some(name) = changes.name {
            ship_am.name = ActiveValue::Set(name);
        }
        if let Some(planet) = changes.planet {
            ship_am.planet = ActiveValue::Set(planet);
        }
        if let Some(category) = changes.category {
            ship_am.category = ActiveValue::Set(category);
        }
        if let Some(production_date) = changes.production_date {
            ship_am.production_date = ActiveValue::Set(production_date);
        }
        if let Some(is_used) = changes.is_used {
            ship_am.is_used = ActiveValue::Set(is_used);
        }
        if let Some(speed) = changes.speed {
            ship_am.speed = ActiveValue::Set(speed);
        }
        if let Some(crew_size) = changes.crew_size {
            ship_am.crew_size = ActiveValue::Set(crew_size);
        }
        ship_am.rating = ActiveValue::Set(rating);

        ship_am.update(self.db).await
    }

    /// Deletes a ship
    ///
    /// Returns OK regardless of the ship existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, ship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ship::delete_by_id(ship_id)
            .exec(self.db)
            .await
    }
}
