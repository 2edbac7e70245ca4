pub mod animation;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod overlay;
pub mod surface;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, EasingType, StopBehavior, Waveform};
pub use error::{Error, Result};
pub use geometry::ScanRect;
pub use overlay::{AnimationState, OverlayConfig, OverlayFrame, ScanLine, ScanOverlay};
pub use surface::{RecordingSurface, Surface};
