//! HTTP boundary for the aggregation core.
//!
//! Two endpoints, both GET. `/version` reports a constant string and never
//! touches the network. `/temperature` invokes the aggregator exactly once
//! per request and translates its `Option` into a response: a number means
//! 200, absence means 503. The boundary never substitutes a fallback
//! average.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::aggregator::Aggregator;

/// Application version reported by `/version`.
pub const APP_VERSION: &str = "v0.0.1";

/// Body of the 503 returned when no box contributed a fresh measurement.
pub const NO_FRESH_DATA_MESSAGE: &str =
    "No fresh temperature measurements (newer than 1 hour) were found from the senseBoxes.";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Shared state available to all handlers via `State`. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

#[derive(Serialize)]
struct TemperatureOk {
    status: &'static str,
    average_temperature_c: f64,
}

#[derive(Serialize)]
struct TemperatureUnavailable {
    status: &'static str,
    message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: APP_VERSION,
    })
}

async fn temperature(
    State(state): State<AppState>,
) -> Result<Json<TemperatureOk>, (StatusCode, Json<TemperatureUnavailable>)> {
    match state.aggregator.average_temperature().await {
        Some(average) => Ok(Json(TemperatureOk {
            status: "ok",
            average_temperature_c: average,
        })),
        None => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(TemperatureUnavailable {
                status: "error",
                message: NO_FRESH_DATA_MESSAGE,
            }),
        )),
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(version))
        .route("/temperature", get(temperature))
        .with_state(state)
}
