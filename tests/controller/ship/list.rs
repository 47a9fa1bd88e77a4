use hangar::server::controller::ship::get_ships;

use super::*;

/// Expect 200 OK with the first 3 ships by ID when no parameters are given
#[tokio::test]
async fn returns_default_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ships((0..4).map(|i| ShipFixture::new().name(format!("Ship {}", i))))
        .build()
        .await?;

    let result = get_ships(
        State(test.to_app_state()),
        Ok(Query(ShipFilterParams::default())),
        Ok(Query(ShipPageParams::default())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let ships: Vec<ShipDto> = body_json(resp).await;
    let names: Vec<&str> = ships.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ship 0", "Ship 1", "Ship 2"]);

    Ok(())
}

/// Expect filters, order, and page parameters to be applied together
#[tokio::test]
async fn applies_filters_and_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ship(ShipFixture::new().name("Slow").speed(0.1).is_used(true))
        .with_ship(ShipFixture::new().name("Fast").speed(0.9).is_used(true))
        .with_ship(ShipFixture::new().name("Medium").speed(0.5).is_used(true))
        .with_ship(ShipFixture::new().name("Unused").speed(0.3))
        .build()
        .await?;

    let filter = ShipFilterParams {
        is_used: Some(true),
        ..Default::default()
    };
    let page = ShipPageParams {
        order: Some(ShipOrderDto::Speed),
        page_number: Some(0),
        page_size: Some(10),
    };
    let resp = get_ships(
        State(test.to_app_state()),
        Ok(Query(filter)),
        Ok(Query(page)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let ships: Vec<ShipDto> = body_json(resp).await;
    let names: Vec<&str> = ships.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Slow", "Medium", "Fast"]);

    Ok(())
}

/// Expect 400 Bad Request for a page size below 1
#[tokio::test]
async fn rejects_invalid_page_size() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let page = ShipPageParams {
        page_size: Some(0),
        ..Default::default()
    };
    let resp = get_ships(
        State(test.to_app_state()),
        Ok(Query(ShipFilterParams::default())),
        Ok(Query(page)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert!(error.error.contains("pageSize"), "Error: {}", error.error);

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are not present
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_ships(
        State(test.to_app_state()),
        Ok(Query(ShipFilterParams::default())),
        Ok(Query(ShipPageParams::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 400 Bad Request when the requested page starts past the last addressable row
#[tokio::test]
async fn rejects_page_beyond_range() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ship(ShipFixture::new())
        .build()
        .await?;

    let page = ShipPageParams {
        page_number: Some(i64::MAX),
        page_size: Some(3),
        ..Default::default()
    };
    let resp = get_ships(
        State(test.to_app_state()),
        Ok(Query(ShipFilterParams::default())),
        Ok(Query(page)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert!(error.error.contains("pageNumber"), "Error: {}", error.error);

    Ok(())
}

/// Expect name and planet filters to match substrings case-sensitively
#[tokio::test]
async fn substring_filters_are_case_sensitive() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ship(ShipFixture::new().name("Falcon").planet("Earth"))
        .build()
        .await?;

    let cases = [
        (Some("falcon"), None, 0),
        (Some("alco"), None, 1),
        (None, Some("earth"), 0),
        (None, Some("Ear"), 1),
    ];
    for (name, planet, expected) in cases {
        let filter = ShipFilterParams {
            name: name.map(str::to_string),
            planet: planet.map(str::to_string),
            ..Default::default()
        };
        let resp = get_ships(
            State(test.to_app_state()),
            Ok(Query(filter)),
            Ok(Query(ShipPageParams::default())),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let ships: Vec<ShipDto> = body_json(resp).await;
        assert_eq!(ships.len(), expected, "name: {:?}, planet: {:?}", name, planet);
    }

    Ok(())
}
