//! openSenseMap API client.
//!
//! Retrieves senseBox data from the openSenseMap platform. One fetch per
//! box id, no retries: a box that fails a fetch is simply excluded from the
//! current aggregation cycle.
//!
//! API documentation: https://docs.opensensemap.org
//! Box endpoint: https://api.opensensemap.org/boxes/:boxId

use serde::Deserialize;
use serde_json::Value;

use crate::model::OsmError;

// ============================================================================
// openSenseMap API Response Structures
// ============================================================================

/// One senseBox as returned by `GET /boxes/{id}`.
///
/// Only the sensor list is of interest here; the rest of the (large)
/// response body is ignored. A box without a `sensors` array is treated as
/// having none.
#[derive(Debug, Deserialize)]
pub struct BoxResponse {
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

/// A single named sensor channel on a box.
#[derive(Debug, Deserialize)]
pub struct Sensor {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "lastMeasurement")]
    pub last_measurement: Option<LastMeasurement>,
}

/// The most recent measurement reported by one sensor.
///
/// `value` is usually a decimal string ("21.4") but some boxes report raw
/// JSON numbers; both forms are kept as-is here and normalized by the
/// aggregator. `createdAt` is RFC 3339, typically with the "Z" suffix.
#[derive(Debug, Deserialize)]
pub struct LastMeasurement {
    pub value: Option<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Build the URL for a single box.
pub fn build_box_url(base_url: &str, box_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), box_id)
}

/// Fetch one senseBox.
///
/// # Parameters
/// - `client`: HTTP client, already carrying the per-fetch timeout
/// - `base_url`: box API base, e.g. `https://api.opensensemap.org/boxes`
/// - `box_id`: 24-character box id
///
/// Transport errors, non-success status codes, and malformed bodies all
/// collapse into a per-box [`OsmError`] for the caller to log and skip.
pub async fn fetch_box(
    client: &reqwest::Client,
    base_url: &str,
    box_id: &str,
) -> Result<BoxResponse, OsmError> {
    let url = build_box_url(base_url, box_id);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| OsmError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(OsmError::HttpError(response.status().as_u16()));
    }

    response
        .json::<BoxResponse>()
        .await
        .map_err(|e| OsmError::ParseError(e.to_string()))
}

/// Returns the first sensor whose title equals `phenomenon`.
///
/// Scanning stops at the first match: if a box ever reports two sensors
/// with the same title, later ones are ignored.
pub fn first_matching_sensor<'a>(response: &'a BoxResponse, phenomenon: &str) -> Option<&'a Sensor> {
    response.sensors.iter().find(|s| s.title == phenomenon)
}

// ============================================================================
// Tests
// ============================================================================
