//! City reference data handlers.

use axum::Json;
use smogcast_core::{city_names, CityCoordinates};

/// GET /cities - City names in table order.
pub async fn list() -> Json<Vec<&'static str>> {
    Json(city_names())
}

/// GET /city-coordinates - City name to `[lat, lon]`.
pub async fn coordinates() -> Json<CityCoordinates> {
    Json(CityCoordinates)
}
