//! Tests for ship controller endpoints.
//!
//! Handlers are called directly with their extractor values, apart from the router tests which
//! send raw requests so query, path, and body rejections are exercised.

mod count;
mod create;
mod delete;
mod get;
mod list;
mod update;

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use hangar::model::{
    api::ErrorDto,
    ship::{ShipCategoryDto, ShipDto, ShipFieldsDto, ShipFilterParams, ShipOrderDto, ShipPageParams},
};

use super::*;

/// 3015-06-15T12:00:00Z
const PRODUCTION_DATE_3015: i64 = 32_991_278_400_000;

fn new_ship_body() -> ShipFieldsDto {
    ShipFieldsDto {
        name: Some("Serenity".to_string()),
        planet: Some("Persephone".to_string()),
        category: Some(ShipCategoryDto::Transport),
        production_date: Some(PRODUCTION_DATE_3015),
        is_used: None,
        speed: Some(0.5),
        crew_size: Some(9),
    }
}
