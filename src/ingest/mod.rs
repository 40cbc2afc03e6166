//! Ingest clients for external sensor data providers.
//!
//! Submodules:
//! - `opensensemap` — senseBox data from the openSenseMap API.

pub mod opensensemap;
