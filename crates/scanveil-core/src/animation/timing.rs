//! Time calculation utilities for the scan line
//!
//! Provides pure functions for calculating animation phase and interpolation.

use std::time::Duration;

/// Position within the current cycle, in [0.0, 1.0)
///
/// A zero period has no cycle; it reports 1.0 so the line sits at its end.
#[inline]
pub fn cycle_progress(elapsed: Duration, period: Duration) -> f64 {
    if period.is_zero() {
        return 1.0;
    }
    let wrapped = elapsed.as_nanos() % period.as_nanos();
    clamp_unit(wrapped as f64 / period.as_nanos() as f64)
}

/// Clamp into [0.0, 1.0]; NaN maps to 0.0
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
