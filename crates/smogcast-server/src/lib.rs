//! HTTP API for AQI prediction.
//!
//! Routes:
//!
//! - `POST /predict`: pollutant readings in, `{aqi, category, color, city}` out
//! - `GET /cities`: supported city names
//! - `GET /city-coordinates`: city name to `[lat, lon]`
//! - `GET /health`: liveness check

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;
mod state;

pub use state::ServerState;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router over shared, read-only state.
pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/cities", get(handlers::cities::list))
        .route("/city-coordinates", get(handlers::cities::coordinates))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
