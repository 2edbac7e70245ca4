//! Drawing contract between the overlay and its host.

use crate::overlay::OverlayFrame;

/// Anything that can draw an [`OverlayFrame`]
///
/// Closures taking `&OverlayFrame` implement this, so a host can inject a
/// rendering callback without a dedicated type.
pub trait Surface {
    fn present(&mut self, frame: &OverlayFrame);
}

impl<F> Surface for F
where
    F: FnMut(&OverlayFrame),
{
    fn present(&mut self, frame: &OverlayFrame) {
        self(frame)
    }
}

/// Surface that keeps every presented frame, for headless hosts
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<OverlayFrame>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[OverlayFrame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&OverlayFrame> {
        self.frames.last()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, frame: &OverlayFrame) {
        self.frames.push(*frame);
    }
}
