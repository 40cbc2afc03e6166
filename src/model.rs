//! Core data types for the senseBox temperature service.
//!
//! This module defines the shared domain model imported by all other
//! modules. It contains no logic and no I/O — only types.

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// A single temperature measurement extracted from one senseBox.
///
/// Corresponds to the `lastMeasurement` of the first sensor whose title
/// matches the configured phenomenon, enriched with the id of the box it
/// came from. Created fresh per fetch and discarded after aggregation;
/// never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxReading {
    pub box_id: String,
    pub value_c: f64,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or processing a single senseBox.
///
/// Every variant is scoped to one box. The aggregator logs the failure and
/// moves on to the next box; nothing here ever aborts a whole aggregation
/// cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum OsmError {
    /// Non-2xx HTTP response from the openSenseMap API.
    HttpError(u16),
    /// Transport-level failure (timeout, connection refused, TLS).
    RequestFailed(String),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The box has no sensor with the configured phenomenon title.
    PhenomenonNotFound { box_id: String, phenomenon: String },
    /// The matching sensor lacks a last measurement, or the measurement
    /// lacks a value or timestamp.
    NoMeasurement(String),
    /// The measurement's `createdAt` could not be parsed as RFC 3339.
    InvalidTimestamp { box_id: String, raw: String },
    /// The measurement's value is not numeric.
    InvalidValue { box_id: String, raw: String },
}

impl std::fmt::Display for OsmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsmError::HttpError(code) => write!(f, "HTTP error: {}", code),
            OsmError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            OsmError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            OsmError::PhenomenonNotFound { box_id, phenomenon } => {
                write!(f, "Box {} has no '{}' sensor", box_id, phenomenon)
            }
            OsmError::NoMeasurement(box_id) => {
                write!(f, "No usable last measurement for box: {}", box_id)
            }
            OsmError::InvalidTimestamp { box_id, raw } => {
                write!(f, "Invalid timestamp for box {}: '{}'", box_id, raw)
            }
            OsmError::InvalidValue { box_id, raw } => {
                write!(f, "Non-numeric value for box {}: '{}'", box_id, raw)
            }
        }
    }
}

impl std::error::Error for OsmError {}
