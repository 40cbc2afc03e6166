//! The numeric reduction behind `/temperature`.
//!
//! Sum-and-count, so the result cannot depend on the order the boxes
//! happened to answer in.

/// Arithmetic mean of the values, or `None` for an empty slice.
///
/// The empty case is the "no fresh data" outcome; returning `None` instead
/// of dividing keeps the zero-station cycle from ever producing NaN.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round to one decimal place.
///
/// Ties round half away from zero (`f64::round` semantics): 0.25 → 0.3,
/// -0.25 → -0.3. The rounding rule is part of the observable contract of
/// `/temperature`, so tests pin exact values.
pub fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
