//! Periodic scan line motion

use serde::Serialize;

use super::timing::clamp_unit;
use crate::config::{EasingType, Waveform};

/// Line state at one instant of the cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSample {
    /// Normalized vertical progress within the track, in [0, 1]
    pub position: f64,
    /// Line opacity, in [0, 1]
    pub opacity: f64,
}

impl Waveform {
    /// Sample the waveform at `phase` (fraction of the period elapsed)
    pub fn sample(self, phase: f64, easing: EasingType) -> LineSample {
        let phase = clamp_unit(phase);
        let (position, opacity) = match self {
            Waveform::Ramp => (easing.apply(phase), 1.0),
            Waveform::PingPong => (easing.apply(triangle(phase)), 1.0),
            Waveform::Pulse => (0.5, easing.apply(triangle(phase))),
        };
        LineSample {
            position: clamp_unit(position),
            opacity: clamp_unit(opacity),
        }
    }
}

/// 0 → 1 over the first half of the phase, 1 → 0 over the second
#[inline]
fn triangle(phase: f64) -> f64 {
    if phase <= 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    }
}
