//! Average ambient temperature over a fixed set of openSenseMap senseBoxes,
//! exposed through a two-endpoint HTTP surface.
//!
//! The core is [`aggregator::Aggregator`]: it fetches every configured box
//! concurrently, extracts the first sensor matching the configured
//! phenomenon, drops measurements older than the freshness window, and
//! averages whatever survives. Individual boxes fail routinely — offline,
//! stale, malformed — and each failure is isolated to that box.

pub mod aggregator;
pub mod analysis;
pub mod config;
pub mod http;
pub mod ingest;
pub mod model;
pub mod stations;
