use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ship::{ShipDto, ShipFieldsDto, ShipFilterParams, ShipPageParams},
    },
    server::{
        data::ship::{
            filter::ShipFilter,
            query::{ShipOrder, ShipPage},
        },
        error::{ship::ShipError, Error},
        model::{app::AppState, ship::ShipFields},
        service::ship::ShipService,
    },
};

pub static SHIP_TAG: &str = "ship";

/// List ships matching the filters, one page at a time
#[utoipa::path(
    get,
    path = "/rest/ships",
    tag = SHIP_TAG,
    params(ShipFilterParams, ShipPageParams),
    responses(
        (status = 200, description = "Success when listing ships", body = Vec<ShipDto>),
        (status = 400, description = "Invalid filter or page parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ships(
    State(state): State<AppState>,
    filter: Result<Query<ShipFilterParams>, QueryRejection>,
    page: Result<Query<ShipPageParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(filter) = filter.map_err(ShipError::from)?;
    let Query(page_params) = page.map_err(ShipError::from)?;

    let filter = ShipFilter::try_from(filter)?;
    let page = ShipPage::try_from(&page_params)?;
    let order = ShipOrder::from(page_params.order.unwrap_or_default());

    let ship_service = ShipService::new(&state.db);
    let ships = ship_service.list(&filter, order, page).await?;

    let ship_dtos: Vec<ShipDto> = ships.into_iter().map(ShipDto::from).collect();

    Ok((StatusCode::OK, Json(ship_dtos)))
}

/// Count ships matching the filters
#[utoipa::path(
    get,
    path = "/rest/ships/count",
    tag = SHIP_TAG,
    params(ShipFilterParams),
    responses(
        (status = 200, description = "Number of matching ships", body = u64),
        (status = 400, description = "Invalid filter parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ships_count(
    State(state): State<AppState>,
    filter: Result<Query<ShipFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(filter) = filter.map_err(ShipError::from)?;
    let filter = ShipFilter::try_from(filter)?;

    let ship_service = ShipService::new(&state.db);
    let count = ship_service.count(&filter).await?;

    Ok((StatusCode::OK, Json(count)))
}

/// Register a new ship
///
/// The rating is calculated by the server, any `id` or `rating` in the body is ignored.
#[utoipa::path(
    post,
    path = "/rest/ships",
    tag = SHIP_TAG,
    request_body = ShipFieldsDto,
    responses(
        (status = 200, description = "The registered ship", body = ShipDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ship(
    State(state): State<AppState>,
    body: Result<Json<ShipFieldsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = body.map_err(ShipError::from)?;
    let fields = ShipFields::try_from(body)?;

    let ship_service = ShipService::new(&state.db);
    let ship = ship_service.create(fields).await?;

    Ok((StatusCode::OK, Json(ShipDto::from(ship))))
}

/// Get a ship by ID
#[utoipa::path(
    get,
    path = "/rest/ships/{id}",
    tag = SHIP_TAG,
    params(("id" = i64, Path, description = "Ship ID, must be positive")),
    responses(
        (status = 200, description = "The requested ship", body = ShipDto),
        (status = 400, description = "Invalid ship ID", body = ErrorDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ship(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id.map_err(ShipError::from)?;

    let ship_service = ShipService::new(&state.db);
    let ship = ship_service.get(id).await?;

    Ok((StatusCode::OK, Json(ShipDto::from(ship))))
}

/// Update the supplied fields of a ship
///
/// Fields that are absent or `null` keep their stored value. The rating is recalculated
/// whenever any field is supplied.
#[utoipa::path(
    post,
    path = "/rest/ships/{id}",
    tag = SHIP_TAG,
    params(("id" = i64, Path, description = "Ship ID, must be positive")),
    request_body = ShipFieldsDto,
    responses(
        (status = 200, description = "The updated ship", body = ShipDto),
        (status = 400, description = "Invalid ship ID or field", body = ErrorDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ship(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ShipFieldsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id.map_err(ShipError::from)?;
    let Json(body) = body.map_err(ShipError::from)?;
    let changes = ShipFields::try_from(body)?;

    let ship_service = ShipService::new(&state.db);
    let ship = ship_service.update(id, changes).await?;

    Ok((StatusCode::OK, Json(ShipDto::from(ship))))
}

/// Delete a ship by ID, returning its last stored state
#[utoipa::path(
    delete,
    path = "/rest/ships/{id}",
    tag = SHIP_TAG,
    params(("id" = i64, Path, description = "Ship ID, must be positive")),
    responses(
        (status = 200, description = "The deleted ship", body = ShipDto),
        (status = 400, description = "Invalid ship ID", body = ErrorDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ship(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id.map_err(ShipError::from)?;

    let ship_service = ShipService::new(&state.db);
    let ship = ship_service.delete(id).await?;

    Ok((StatusCode::OK, Json(ShipDto::from(ship))))
}
