use hangar::server::controller::ship::update_ship;
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 OK with only the supplied fields changed and the rating recalculated
#[tokio::test]
async fn updates_ship() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ship_table().build().await?;
    let ship_model = test
        .ship()
        .insert_ship(ShipFixture::new().planet("Earth"))
        .await?;

    let body = ShipFieldsDto {
        speed: Some(0.9),
        ..Default::default()
    };
    let resp = update_ship(
        State(test.to_app_state()),
        Ok(Path(ship_model.id as i64)),
        Ok(Json(body)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let ship: ShipDto = body_json(resp).await;
    assert_eq!(ship.planet, "Earth");
    assert_eq!(ship.speed, 0.9);
    assert_eq!(ship.crew_size, ship_model.crew_size);
    assert_eq!(ship.rating, 12.0);

    Ok(())
}

/// Expect 400 Bad Request for an empty name and the ship to stay unchanged
#[tokio::test]
async fn rejects_invalid_field() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ship_table().build().await?;
    let ship_model = test.ship().insert_ship(ShipFixture::new()).await?;

    let body = ShipFieldsDto {
        name: Some(String::new()),
        ..Default::default()
    };
    let resp = update_ship(
        State(test.to_app_state()),
        Ok(Path(ship_model.id as i64)),
        Ok(Json(body)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let stored = entity::prelude::Ship::find_by_id(ship_model.id)
        .one(&test.db)
        .await?;
    assert_eq!(stored, Some(ship_model));

    Ok(())
}

/// Expect 404 Not Found when updating a ship that does not exist
#[tokio::test]
async fn not_found_for_missing_ship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let resp = update_ship(
        State(test.to_app_state()),
        Ok(Path(3)),
        Ok(Json(new_ship_body())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
