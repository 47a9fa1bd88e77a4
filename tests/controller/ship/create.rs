use hangar::server::controller::ship::create_ship;

use super::*;

/// Expect 200 OK with the stored ship and its calculated rating
#[tokio::test]
async fn creates_ship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let result = create_ship(State(test.to_app_state()), Ok(Json(new_ship_body()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let ship: ShipDto = body_json(resp).await;
    assert!(ship.id > 0);
    assert_eq!(ship.name, "Serenity");
    assert_eq!(ship.production_date, PRODUCTION_DATE_3015);
    assert!(!ship.is_used);
    assert_eq!(ship.rating, 8.0);

    Ok(())
}

/// Expect 400 Bad Request naming the field for a speed of 1.0
#[tokio::test]
async fn rejects_invalid_speed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let body = ShipFieldsDto {
        speed: Some(1.0),
        ..new_ship_body()
    };
    let resp = create_ship(State(test.to_app_state()), Ok(Json(body)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert!(error.error.contains("speed"), "Error: {}", error.error);

    Ok(())
}

/// Expect 400 Bad Request when a required field is absent
#[tokio::test]
async fn rejects_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let body = ShipFieldsDto {
        name: None,
        ..new_ship_body()
    };
    let resp = create_ship(State(test.to_app_state()), Ok(Json(body)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
