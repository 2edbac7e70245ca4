//! Easing curves for the scan line sweep
//!
//! The sweep phase (fraction of the period elapsed) goes in, the line's
//! normalized depth in the track comes out. Every curve except `None` leaves
//! the top edge at phase 0 and lands on the bottom edge at phase 1; the
//! ease-out curves rush away from the top and settle onto the bottom.

pub use crate::config::EasingType;

impl EasingType {
    /// Line depth for a sweep phase
    ///
    /// Out-of-range phases (timer overshoot) are clamped first, so the line
    /// never leaves its track.
    ///
    /// ```
    /// use scanveil_core::EasingType;
    ///
    /// // Linear: a quarter of the period puts the line a quarter of the way down
    /// assert_eq!(EasingType::Linear.apply(0.25), 0.25);
    /// // Cubic is already 7/8 of the way down at half period
    /// assert_eq!(EasingType::Cubic.apply(0.5), 0.875);
    /// // `None` parks the line at the top until the sweep completes
    /// assert_eq!(EasingType::None.apply(0.99), 0.0);
    /// ```
    #[inline]
    pub fn apply(&self, phase: f64) -> f64 {
        let t = if phase.is_nan() { 0.0 } else { phase.clamp(0.0, 1.0) };
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// 1 - 2^(-10t), snapped to the bottom edge at t = 1
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}
