//! Validated ship inputs and conversions between wire DTOs and domain types.
//!
//! Handlers receive [`crate::model::ship`] DTOs and convert them into the types defined here
//! before calling [`crate::server::service::ship::ShipService`]. Conversion only rejects values
//! that can't be represented (e.g. a timestamp outside chrono's range); field rules are checked
//! by [`ShipFields::validate`].

use chrono::NaiveDateTime;
use entity::ship::ShipCategory;

use crate::{
    model::ship::{
        ShipCategoryDto, ShipDto, ShipFieldsDto, ShipFilterParams, ShipOrderDto, ShipPageParams,
    },
    server::{
        data::ship::{
            filter::ShipFilter,
            query::{ShipOrder, ShipPage},
        },
        error::ship::{ShipError, ShipField},
        model::db::ShipModel,
        util::{time, validation::FieldValue},
    },
};

pub const DEFAULT_PAGE_NUMBER: u64 = 0;
pub const DEFAULT_PAGE_SIZE: u64 = 3;

/// Ship fields supplied by a client, `None` meaning "not supplied".
///
/// Used both for creation, where every field but `is_used` is required, and for partial
/// updates, where only supplied fields are applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipFields {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub category: Option<ShipCategory>,
    pub production_date: Option<NaiveDateTime>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

/// A fully specified, validated ship ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub category: ShipCategory,
    pub production_date: NaiveDateTime,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
}

impl ShipFields {
    /// Returns true if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.supplied().is_empty()
    }

    /// Checks every supplied field against its rule.
    ///
    /// # Returns
    /// - `Ok(())` - Every supplied field is valid
    /// - `Err(ShipError::InvalidField)` - The first field, in declaration order, that is invalid
    pub fn validate(&self) -> Result<(), ShipError> {
        match self
            .supplied()
            .into_iter()
            .find(|(_, value)| !value.is_valid())
        {
            Some((field, _)) => Err(ShipError::InvalidField(field)),
            None => Ok(()),
        }
    }

    /// Converts into a [`NewShip`], requiring every field except `is_used`.
    ///
    /// `is_used` defaults to `false` when not supplied.
    ///
    /// # Returns
    /// - `Ok(NewShip)` - All required fields supplied and valid
    /// - `Err(ShipError::InvalidField)` - A supplied field failed validation
    /// - `Err(ShipError::MissingField)` - A required field was not supplied
    pub fn into_new_ship(self) -> Result<NewShip, ShipError> {
        self.validate()?;

        Ok(NewShip {
            name: self.name.ok_or(ShipError::MissingField(ShipField::Name))?,
            planet: self
                .planet
                .ok_or(ShipError::MissingField(ShipField::Planet))?,
            category: self
                .category
                .ok_or(ShipError::MissingField(ShipField::Category))?,
            production_date: self
                .production_date
                .ok_or(ShipError::MissingField(ShipField::ProductionDate))?,
            is_used: self.is_used.unwrap_or(false),
            speed: self.speed.ok_or(ShipError::MissingField(ShipField::Speed))?,
            crew_size: self
                .crew_size
                .ok_or(ShipError::MissingField(ShipField::CrewSize))?,
        })
    }

    fn supplied(&self) -> Vec<(ShipField, FieldValue<'_>)> {
        let mut supplied = Vec::new();

        if let Some(name) = &self.name {
            supplied.push((ShipField::Name, FieldValue::Text(name)));
        }
        if let Some(planet) = &self.planet {
            supplied.push((ShipField::Planet, FieldValue::Text(planet)));
        }
        if let Some(category) = self.category {
            supplied.push((ShipField::Category, FieldValue::Category(category)));
        }
        if let Some(production_date) = &self.production_date {
            supplied.push((
                ShipField::ProductionDate,
                FieldValue::Timestamp(production_date),
            ));
        }
        if let Some(is_used) = self.is_used {
            supplied.push((ShipField::IsUsed, FieldValue::Flag(is_used)));
        }
        if let Some(speed) = self.speed {
            supplied.push((ShipField::Speed, FieldValue::Speed(speed)));
        }
        if let Some(crew_size) = self.crew_size {
            supplied.push((ShipField::CrewSize, FieldValue::CrewSize(crew_size)));
        }

        supplied
    }
}

impl TryFrom<ShipFieldsDto> for ShipFields {
    type Error = ShipError;

    fn try_from(dto: ShipFieldsDto) -> Result<Self, Self::Error> {
        let production_date = dto
            .production_date
            .map(|millis| {
                time::from_millis(millis).ok_or(ShipError::InvalidField(ShipField::ProductionDate))
            })
            .transpose()?;

        Ok(Self {
            name: dto.name,
            planet: dto.planet,
            category: dto.category.map(ShipCategory::from),
            production_date,
            is_used: dto.is_used,
            speed: dto.speed,
            crew_size: dto.crew_size,
        })
    }
}

impl TryFrom<ShipFilterParams> for ShipFilter {
    type Error = ShipError;

    fn try_from(params: ShipFilterParams) -> Result<Self, Self::Error> {
        let produced_from = params
            .after
            .map(|millis| timestamp_param("after", millis))
            .transpose()?;

        let produced_until = params
            .before
            .map(|millis| {
                let before = timestamp_param("before", millis)?;

                time::last_instant_before_year(&before).ok_or(ShipError::InvalidQuery {
                    param: "before",
                    reason: "year is out of range".to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            name: params.name,
            planet: params.planet,
            category: params.category.map(ShipCategory::from),
            produced_from,
            produced_until,
            is_used: params.is_used,
            min_speed: params.min_speed,
            max_speed: params.max_speed,
            min_crew_size: params.min_crew_size,
            max_crew_size: params.max_crew_size,
            min_rating: params.min_rating,
            max_rating: params.max_rating,
        })
    }
}

impl TryFrom<&ShipPageParams> for ShipPage {
    type Error = ShipError;

    fn try_from(params: &ShipPageParams) -> Result<Self, Self::Error> {
        let number = match params.page_number {
            Some(number) => u64::try_from(number).map_err(|_| ShipError::InvalidQuery {
                param: "pageNumber",
                reason: "must not be negative".to_string(),
            })?,
            None => DEFAULT_PAGE_NUMBER,
        };

        let size = match params.page_size {
            Some(size) if size >= 1 => size as u64,
            Some(_) => {
                return Err(ShipError::InvalidQuery {
                    param: "pageSize",
                    reason: "must be at least 1".to_string(),
                })
            }
            None => DEFAULT_PAGE_SIZE,
        };

        // The row offset is bound as a signed 64-bit integer
        number
            .checked_mul(size)
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or(ShipError::InvalidQuery {
                param: "pageNumber",
                reason: "page is out of range".to_string(),
            })?;

        Ok(Self { number, size })
    }
}

fn timestamp_param(param: &'static str, millis: i64) -> Result<NaiveDateTime, ShipError> {
    time::from_millis(millis).ok_or(ShipError::InvalidQuery {
        param,
        reason: "timestamp is out of range".to_string(),
    })
}

impl From<ShipOrderDto> for ShipOrder {
    fn from(order: ShipOrderDto) -> Self {
        match order {
            ShipOrderDto::Id => Self::Id,
            ShipOrderDto::Speed => Self::Speed,
            ShipOrderDto::CrewSize => Self::CrewSize,
            ShipOrderDto::Rating => Self::Rating,
            ShipOrderDto::Date => Self::ProductionDate,
        }
    }
}

impl From<ShipCategoryDto> for ShipCategory {
    fn from(category: ShipCategoryDto) -> Self {
        match category {
            ShipCategoryDto::Transport => Self::Transport,
            ShipCategoryDto::Military => Self::Military,
            ShipCategoryDto::Merchant => Self::Merchant,
        }
    }
}

impl From<ShipCategory> for ShipCategoryDto {
    fn from(category: ShipCategory) -> Self {
        match category {
            ShipCategory::Transport => Self::Transport,
            ShipCategory::Military => Self::Military,
            ShipCategory::Merchant => Self::Merchant,
        }
    }
}

impl From<ShipModel> for ShipDto {
    fn from(ship: ShipModel) -> Self {
        Self {
            id: ship.id,
            name: ship.name,
            planet: ship.planet,
            category: ship.category.into(),
            production_date: time::to_millis(&ship.production_date),
            is_used: ship.is_used,
            speed: ship.speed,
            crew_size: ship.crew_size,
            rating: ship.rating,
        }
    }
}
