//! Temperature aggregation across the configured senseBoxes.
//!
//! One invocation per incoming `/temperature` request, no state carried
//! between invocations. The cutoff is computed once per cycle, the boxes
//! are fetched concurrently, and every per-box failure is absorbed here —
//! a failing box shrinks the pool of contributors but never surfaces as an
//! error to the caller.

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;

use crate::analysis::average::{mean, round_to_tenth};
use crate::analysis::freshness::{freshness_cutoff, is_fresh, parse_created_at};
use crate::config::Config;
use crate::ingest::opensensemap::{fetch_box, first_matching_sensor};
use crate::model::{BoxReading, OsmError};

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

/// Computes the average fresh temperature across the configured boxes.
pub struct Aggregator {
    config: Config,
    client: reqwest::Client,
}

impl Aggregator {
    /// Build an aggregator from resolved configuration.
    ///
    /// The HTTP client carries the per-fetch timeout, so a hung box cannot
    /// stall its fetch task for longer than `fetch_timeout_secs`.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Average of all fresh temperature readings, rounded to one decimal
    /// place. `None` means no box contributed a fresh measurement — the
    /// only "no data" outcome this operation has.
    pub async fn average_temperature(&self) -> Option<f64> {
        self.average_temperature_at(Utc::now()).await
    }

    /// Clock-injected core of [`Self::average_temperature`].
    ///
    /// `now` fixes the freshness cutoff for the whole cycle before any box
    /// is fetched, so every box is judged against the same instant rather
    /// than against whenever its fetch happened to complete.
    pub async fn average_temperature_at(&self, now: DateTime<Utc>) -> Option<f64> {
        let cutoff = freshness_cutoff(now, self.config.freshness_window_secs);

        // Independent fetch tasks, one per box, joined before the fold.
        // No shared accumulator: each task returns its own outcome.
        let outcomes = join_all(
            self.config
                .box_ids
                .iter()
                .map(|box_id| self.read_box(box_id, cutoff)),
        )
        .await;

        let mut fresh_values = Vec::new();
        for (box_id, outcome) in self.config.box_ids.iter().zip(outcomes) {
            match outcome {
                Ok(Some(reading)) => {
                    tracing::debug!(
                        box_id = %reading.box_id,
                        value_c = reading.value_c,
                        created_at = %reading.created_at,
                        "fresh reading"
                    );
                    fresh_values.push(reading.value_c);
                }
                Ok(None) => {
                    tracing::debug!(box_id = %box_id, "measurement older than cutoff, skipping");
                }
                Err(err) => log_box_failure(box_id, &err),
            }
        }

        mean(&fresh_values).map(round_to_tenth)
    }

    /// Fetch one box and reduce it to at most one fresh reading.
    ///
    /// `Ok(None)` means the box answered with a valid but stale
    /// measurement; every other shortfall is an [`OsmError`].
    async fn read_box(
        &self,
        box_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Option<BoxReading>, OsmError> {
        let response = fetch_box(&self.client, &self.config.base_url, box_id).await?;

        let sensor = first_matching_sensor(&response, &self.config.phenomenon).ok_or_else(|| {
            OsmError::PhenomenonNotFound {
                box_id: box_id.to_string(),
                phenomenon: self.config.phenomenon.clone(),
            }
        })?;

        let measurement = sensor
            .last_measurement
            .as_ref()
            .ok_or_else(|| OsmError::NoMeasurement(box_id.to_string()))?;

        let raw_value = measurement
            .value
            .as_ref()
            .ok_or_else(|| OsmError::NoMeasurement(box_id.to_string()))?;

        let raw_created_at = measurement
            .created_at
            .as_deref()
            .ok_or_else(|| OsmError::NoMeasurement(box_id.to_string()))?;

        let created_at =
            parse_created_at(raw_created_at).map_err(|_| OsmError::InvalidTimestamp {
                box_id: box_id.to_string(),
                raw: raw_created_at.to_string(),
            })?;

        if !is_fresh(created_at, cutoff) {
            return Ok(None);
        }

        let value_c = parse_value(raw_value).ok_or_else(|| OsmError::InvalidValue {
            box_id: box_id.to_string(),
            raw: raw_value.to_string(),
        })?;

        Ok(Some(BoxReading {
            box_id: box_id.to_string(),
            value_c,
            created_at,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Normalize the API's value field, which is usually a decimal string but
/// occasionally a raw JSON number.
fn parse_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Log a per-box failure at a level matching its kind: transport and parse
/// problems are operational warnings, a box that merely has nothing to
/// offer for this phenomenon is routine.
fn log_box_failure(box_id: &str, err: &OsmError) {
    match err {
        OsmError::HttpError(_) | OsmError::RequestFailed(_) => {
            tracing::warn!(box_id = %box_id, error = %err, "senseBox fetch failed, excluded from this cycle");
        }
        OsmError::ParseError(_)
        | OsmError::InvalidTimestamp { .. }
        | OsmError::InvalidValue { .. } => {
            tracing::warn!(box_id = %box_id, error = %err, "discarding unusable measurement");
        }
        OsmError::PhenomenonNotFound { .. } | OsmError::NoMeasurement(_) => {
            tracing::debug!(box_id = %box_id, error = %err, "box contributed no measurement");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value_accepts_decimal_strings() {
        assert_eq!(parse_value(&json!("21.4")), Some(21.4));
        assert_eq!(parse_value(&json!("-3.0")), Some(-3.0));
        // Whitespace around the number is tolerated.
        assert_eq!(parse_value(&json!(" 18.6 ")), Some(18.6));
    }

    #[test]
    fn test_parse_value_accepts_json_numbers() {
        assert_eq!(parse_value(&json!(21.4)), Some(21.4));
        assert_eq!(parse_value(&json!(21)), Some(21.0));
    }

    #[test]
    fn test_parse_value_rejects_non_numeric_forms() {
        assert_eq!(parse_value(&json!("n/a")), None);
        assert_eq!(parse_value(&json!("")), None);
        assert_eq!(parse_value(&json!(true)), None);
        assert_eq!(parse_value(&json!(null)), None);
        assert_eq!(parse_value(&json!(["21.4"])), None);
    }
}
