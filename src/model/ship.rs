use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Class a ship is registered under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipCategoryDto {
    Transport,
    Military,
    Merchant,
}

/// Field a ship listing is sorted by, always ascending
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrderDto {
    #[default]
    Id,
    Speed,
    CrewSize,
    Rating,
    Date,
}

/// A stored ship record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipDto {
    pub id: i32,
    pub name: String,
    pub planet: String,
    pub category: ShipCategoryDto,
    /// Production date in milliseconds since the Unix epoch (UTC)
    pub production_date: i64,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

/// Ship fields accepted when creating or updating a record
///
/// Creating a ship requires every field except `isUsed`, which defaults to `false`. Updating a
/// ship only overwrites the fields that are present and not `null`. Any `id` or `rating` in the
/// body is ignored, the rating is always calculated by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipFieldsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet: Option<String>,
    #[serde(alias = "shipType", skip_serializing_if = "Option::is_none")]
    pub category: Option<ShipCategoryDto>,
    /// Production date in milliseconds since the Unix epoch (UTC)
    #[serde(alias = "prodDate", skip_serializing_if = "Option::is_none")]
    pub production_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_used: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_size: Option<i32>,
}

/// Optional filters narrowing a ship listing or count, combined with AND
#[derive(Clone, Debug, Default, PartialEq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShipFilterParams {
    /// Substring the ship name must contain
    pub name: Option<String>,
    /// Substring the ship planet must contain
    pub planet: Option<String>,
    /// Exact ship category
    #[serde(alias = "shipType")]
    pub category: Option<ShipCategoryDto>,
    /// Inclusive lower bound of the production date, epoch milliseconds
    pub after: Option<i64>,
    /// Exclusive upper bound by year, ships produced in this timestamp's year or later are excluded
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

/// Sorting and pagination of a ship listing
#[derive(Clone, Debug, Default, PartialEq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShipPageParams {
    /// Field to sort by, defaults to `ID`
    pub order: Option<ShipOrderDto>,
    /// Zero-based page index, defaults to 0
    pub page_number: Option<i64>,
    /// Ships per page, defaults to 3
    pub page_size: Option<i64>,
}
