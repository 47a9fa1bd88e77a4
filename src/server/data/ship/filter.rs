//! Query criteria for ship listings and counts.
//!
//! A [`ShipFilter`] holds the optional constraints a client supplied. [`ShipFilter::condition`]
//! turns only the supplied ones into clauses of a single `AND` condition, leaving sorting and
//! pagination to the repository.

use chrono::NaiveDateTime;
use entity::ship::{Column, ShipCategory};
use sea_orm::{
    sea_query::{Alias, Expr, Func},
    ColumnTrait, Condition, DbBackend, ExprTrait,
};

/// Optional constraints on ship records, absent fields impose no constraint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipFilter {
    /// Case-sensitive substring of the name
    pub name: Option<String>,
    /// Case-sensitive substring of the planet
    pub planet: Option<String>,
    pub category: Option<ShipCategory>,
    /// Inclusive lower bound of the production date
    pub produced_from: Option<NaiveDateTime>,
    /// Inclusive upper bound of the production date
    ///
    /// Built from the client's `before` timestamp via
    /// [`last_instant_before_year`](crate::server::util::time::last_instant_before_year).
    pub produced_until: Option<NaiveDateTime>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Builds the conjunction of every supplied constraint.
    ///
    /// An empty filter yields an empty `Condition::all()`, which matches every row.
    ///
    /// `backend` selects the substring function, `LIKE` is not case-sensitive on every backend.
    pub fn condition(&self, backend: DbBackend) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = &self.name {
            condition = condition.add(contains(backend, Column::Name, name));
        }
        if let Some(planet) = &self.planet {
            condition = condition.add(contains(backend, Column::Planet, planet));
        }
        if let Some(category) = self.category {
            condition = condition.add(Column::Category.eq(category));
        }
        if let Some(produced_from) = self.produced_from {
            condition = condition.add(Column::ProductionDate.gte(produced_from));
        }
        if let Some(produced_until) = self.produced_until {
            condition = condition.add(Column::ProductionDate.lte(produced_until));
        }
        if let Some(is_used) = self.is_used {
            condition = condition.add(Column::IsUsed.eq(is_used));
        }
        if let Some(min_speed) = self.min_speed {
            condition = condition.add(Column::Speed.gte(min_speed));
        }
        if let Some(max_speed) = self.max_speed {
            condition = condition.add(Column::Speed.lte(max_speed));
        }
        if let Some(min_crew_size) = self.min_crew_size {
            condition = condition.add(Column::CrewSize.gte(min_crew_size));
        }
        if let Some(max_crew_size) = self.max_crew_size {
            condition = condition.add(Column::CrewSize.lte(max_crew_size));
        }
        if let Some(min_rating) = self.min_rating {
            condition = condition.add(Column::Rating.gte(min_rating));
        }
        if let Some(max_rating) = self.max_rating {
            condition = condition.add(Column::Rating.lte(max_rating));
        }

        condition
    }
}

/// Case-sensitive test that `column` contains `needle`, with no wildcard characters.
fn contains(backend: DbBackend, column: Column, needle: &str) -> Expr {
    let position = match backend {
        DbBackend::Postgres => "strpos",
        _ => "instr",
    };

    Func::cust(Alias::new(position))
        .arg(Expr::col(column.as_column_ref()))
        .arg(needle)
        .gt(0)
}
