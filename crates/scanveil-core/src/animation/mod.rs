//! Scan line animation building blocks
//!
//! ## Atoms
//! - `easing` - Pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - Phase and interpolation helpers
//! - `waveform` - Periodic line position/opacity as a function of phase
//!
//! The overlay in `crate::overlay` combines these each frame:
//!
//! ```ignore
//! let phase = cycle_progress(elapsed, config.period());
//! let sample = config.waveform.sample(phase, config.easing);
//! let y = lerp(track.y, track.bottom(), sample.position);
//! ```

pub mod easing;
pub mod timing;
pub mod waveform;

pub use timing::{clamp_unit, cycle_progress, lerp};
pub use waveform::LineSample;
