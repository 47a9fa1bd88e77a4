use hangar::server::controller::ship::delete_ship;
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 OK with the deleted ship's last state
#[tokio::test]
async fn deletes_ship() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ship_table().build().await?;
    let ship_model = test.ship().insert_ship(ShipFixture::new()).await?;

    let resp = delete_ship(State(test.to_app_state()), Ok(Path(ship_model.id as i64)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let ship: ShipDto = body_json(resp).await;
    assert_eq!(ship.id, ship_model.id);
    let stored = entity::prelude::Ship::find_by_id(ship_model.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Expect 400 Bad Request for a negative ID
#[tokio::test]
async fn rejects_invalid_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;

    let resp = delete_ship(State(test.to_app_state()), Ok(Path(-1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
