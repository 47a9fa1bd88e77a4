mod ship;

use axum::{body::to_bytes, response::Response};
use hangar_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Reads a response body as JSON
async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
