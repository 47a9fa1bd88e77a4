use hangar::server::controller::ship::get_ship;

use super::*;

/// Expect 200 OK with the requested ship
#[tokio::test]
async fn returns_ship() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ship_table().build().await?;
    let ship_model = test
        .ship()
        .insert_ship(ShipFixture::new().name("Rocinante"))
        .await?;

    let resp = get_ship(State(test.to_app_state()), Ok(Path(ship_model.id as i64)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let ship: ShipDto = body_json(resp).await;
    assert_eq!(ship.id, ship_model.id);
    assert_eq!(ship.name, "Rocinante");
    assert_eq!(ship.rating, ship_model.rating);

    Ok(())
}

/// Expect 400 Bad Request for a non-positive ID
#[tokio::test]
async fn rejects_invalid_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let resp = get_ship(State(test.to_app_state()), Ok(Path(0)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for an ID with no ship
#[tokio::test]
async fn not_found_for_missing_ship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let resp = get_ship(State(test.to_app_state()), Ok(Path(7)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.error, "Ship not found");

    Ok(())
}
