use hangar::server::controller::ship::get_ships_count;

use super::*;

/// Expect 200 OK with the number of ships matching the filters
#[tokio::test]
async fn returns_matching_count() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ships((0..5).map(|i| ShipFixture::new().name(format!("Star {}", i))))
        .with_ship(ShipFixture::new().name("Comet"))
        .build()
        .await?;

    let filter = ShipFilterParams {
        name: Some("Star".to_string()),
        ..Default::default()
    };
    let resp = get_ships_count(State(test.to_app_state()), Ok(Query(filter)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let count: u64 = body_json(resp).await;
    assert_eq!(count, 5);

    Ok(())
}

/// Expect 400 Bad Request for an `after` timestamp chrono can't represent
#[tokio::test]
async fn rejects_unrepresentable_timestamp() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let filter = ShipFilterParams {
        after: Some(i64::MAX),
        ..Default::default()
    };
    let resp = get_ships_count(State(test.to_app_state()), Ok(Query(filter)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
