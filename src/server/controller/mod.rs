//! HTTP controller endpoints for the Hangar web API.
//!
//! Controllers extract query, path, and body inputs, convert them into domain types, call the
//! services, and return JSON responses. Rejected extractions and invalid inputs become 400
//! responses through [`ShipError`](crate::server::error::ship::ShipError). Endpoints are
//! documented for OpenAPI with utoipa.

pub mod ship;
