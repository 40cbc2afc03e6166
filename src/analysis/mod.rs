//! Measurement analysis for the temperature service.
//!
//! Pure functions only — no I/O, no clock reads. The aggregator feeds
//! these from its fetch results.
//!
//! Submodules:
//! - `freshness` — timestamp parsing and the freshness cutoff policy.
//! - `average` — the order-independent numeric reduction.

pub mod average;
pub mod freshness;
