//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /rest/ships` - List one page of ships matching the query filters
/// - `POST /rest/ships` - Register a new ship
/// - `GET /rest/ships/count` - Count ships matching the query filters
/// - `GET /rest/ships/{id}` - Get a ship
/// - `POST /rest/ships/{id}` - Update the supplied fields of a ship
/// - `DELETE /rest/ships/{id}` - Delete a ship
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Hangar", description = "Hangar ship registry API"), tags(
        (name = controller::ship::SHIP_TAG, description = "Ship registry API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::ship::get_ships,
            controller::ship::create_ship
        ))
        .routes(routes!(controller::ship::get_ships_count))
        .routes(routes!(
            controller::ship::get_ship,
            controller::ship::update_ship,
            controller::ship::delete_ship
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
