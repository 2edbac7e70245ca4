//! Scan region overlay with an animated scan line
//!
//! [`ScanOverlay`] owns the animation state machine. The host owns the frame
//! loop: it calls [`ScanOverlay::tick`] at a roughly fixed rate while
//! [`ScanOverlay::needs_frame`] is true and hands the resulting
//! [`OverlayFrame`] to whatever draws it.
//!
//! ```ignore
//! let mut overlay = ScanOverlay::new(SystemClock::new());
//! overlay.set_scan_area(ScanRect::new(0.0, 0.0, 300.0, 300.0));
//! overlay.set_scan_line_track(ScanRect::new(0.0, 0.0, 300.0, 300.0));
//! overlay.start_animating();
//!
//! while overlay.needs_frame() {
//!     if let Some(frame) = overlay.tick() {
//!         surface.present(&frame);
//!     }
//! }
//! ```

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::animation::{cycle_progress, lerp, LineSample};
use crate::clock::{Clock, SystemClock};
use crate::config::{AppConfig, EasingType, LayoutConfig, StopBehavior, Waveform};
use crate::geometry::ScanRect;
use crate::layout::{calculate_scan_rect, line_track_for};
use crate::surface::Surface;

/// Whether the scan line is currently sweeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
}

/// Animation parameters for a single overlay
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub period: Duration,
    pub waveform: Waveform,
    pub easing: EasingType,
    pub stop_behavior: StopBehavior,
    /// Line thickness in surface units
    pub line_thickness: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(2),
            waveform: Waveform::default(),
            easing: EasingType::default(),
            stop_behavior: StopBehavior::default(),
            line_thickness: 1.0,
        }
    }
}

impl OverlayConfig {
    /// Build from the application config, clamping values the overlay cannot use
    pub fn from_app_config(config: &AppConfig) -> Self {
        if config.animation.period_ms == 0 {
            warn!("animation.period_ms is 0, using 1ms");
        }
        let line_thickness = config.layout.line_thickness;
        let line_thickness = if line_thickness.is_finite() && line_thickness > 0.0 {
            line_thickness
        } else {
            warn!(line_thickness, "Invalid layout.line_thickness, using 1.0");
            1.0
        };

        Self {
            period: config.animation.period(),
            waveform: config.animation.waveform,
            easing: config.animation.easing,
            stop_behavior: config.animation.stop_behavior,
            line_thickness,
        }
    }
}

/// Scan line geometry for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScanLine {
    /// Left edge (the track's left edge)
    pub x: f64,
    /// Vertical position, within `[track.y, track.y + track.height]`
    pub y: f64,
    /// Horizontal extent (the track's width)
    pub width: f64,
    /// Never more than the track's height
    pub thickness: f64,
    pub opacity: f64,
    /// Normalized progress the `y` was derived from
    pub position: f64,
    /// Rectangle the line body must stay inside; surfaces shift a thick line
    /// up rather than draw past `track.bottom()`
    pub track: ScanRect,
}

/// Everything a surface needs to draw the overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayFrame {
    /// Highlighted region; `None` when it has no area
    pub scan_area: Option<ScanRect>,
    /// Scan line; `None` when hidden or the track has no area
    pub line: Option<ScanLine>,
    pub state: AnimationState,
}

/// Scan region overlay
///
/// Geometry is read fresh on every frame, so the owner may move either
/// rectangle at any time, including mid-animation.
#[derive(Debug)]
pub struct ScanOverlay<C: Clock = SystemClock> {
    clock: C,
    config: OverlayConfig,
    scan_area: ScanRect,
    line_track: ScanRect,
    state: AnimationState,
    /// Clock reading the current sweep is measured from
    started_at: Duration,
    /// Sweep time already covered at `started_at`
    offset: Duration,
    /// Last derived line state, kept across stop for `StopBehavior::Freeze`
    last_sample: Option<LineSample>,
    frames: u64,
}

impl<C: Clock> ScanOverlay<C> {
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, OverlayConfig::default())
    }

    pub fn with_config(clock: C, config: OverlayConfig) -> Self {
        Self {
            clock,
            config,
            scan_area: ScanRect::ZERO,
            line_track: ScanRect::ZERO,
            state: AnimationState::Idle,
            started_at: Duration::ZERO,
            offset: Duration::ZERO,
            last_sample: None,
            frames: 0,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the animation parameters
    ///
    /// A period change while running keeps the line where it is and continues
    /// at the new speed.
    pub fn set_config(&mut self, config: OverlayConfig) {
        if let Some(elapsed) = self.elapsed() {
            if config.period != self.config.period {
                let phase = cycle_progress(elapsed, self.config.period);
                self.started_at = self.clock.now();
                self.offset = config.period.mul_f64(phase);
            }
        }
        self.config = config;
    }

    pub fn scan_area(&self) -> ScanRect {
        self.scan_area
    }

    pub fn scan_line_track(&self) -> ScanRect {
        self.line_track
    }

    /// Update the highlighted region; takes effect on the next frame
    pub fn set_scan_area(&mut self, rect: ScanRect) {
        self.scan_area = normalize("scan area", rect);
        debug!(area = ?self.scan_area, "Scan area updated");
    }

    /// Update the rectangle the line travels in; takes effect on the next frame
    pub fn set_scan_line_track(&mut self, rect: ScanRect) {
        self.line_track = normalize("scan line track", rect);
        debug!(track = ?self.line_track, "Scan line track updated");
    }

    /// Derive both rectangles from the surface bounds
    pub fn relayout(&mut self, bounds: ScanRect, layout: &LayoutConfig) {
        let area = calculate_scan_rect(bounds, layout);
        self.set_scan_area(area);
        self.set_scan_line_track(line_track_for(area, layout.track_inset));
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Whether the host should keep delivering ticks
    #[inline]
    pub fn needs_frame(&self) -> bool {
        self.is_animating()
    }

    /// Time since the current sweep began, `None` while idle
    pub fn elapsed(&self) -> Option<Duration> {
        self.is_animating()
            .then(|| self.clock.now().saturating_sub(self.started_at) + self.offset)
    }

    /// Last derived line progress in [0, 1], `None` when no line is shown
    pub fn line_position(&self) -> Option<f64> {
        self.last_sample.map(|s| s.position)
    }

    /// Number of frames produced by `tick` since construction
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Begin sweeping; does nothing if already running
    pub fn start_animating(&mut self) {
        if self.is_animating() {
            return;
        }
        self.started_at = self.clock.now();
        self.offset = Duration::ZERO;
        self.state = AnimationState::Running;
        // A restart never shows the previous session's line
        self.last_sample = Some(self.config.waveform.sample(0.0, self.config.easing));
        debug!(
            period_ms = self.config.period.as_millis() as u64,
            waveform = self.config.waveform.label(),
            "Scan line animation started"
        );
    }

    /// Stop sweeping; does nothing if already idle
    ///
    /// Once this returns, `tick` produces no frames until the next start.
    pub fn stop_animating(&mut self) {
        if !self.is_animating() {
            return;
        }
        self.state = AnimationState::Idle;
        if self.config.stop_behavior == StopBehavior::Hide {
            self.last_sample = None;
        }
        debug!(position = ?self.line_position(), "Scan line animation stopped");
    }

    /// Advance the animation to the clock's current time
    ///
    /// Returns `None` while idle; nothing is recomputed in that case.
    pub fn tick(&mut self) -> Option<OverlayFrame> {
        let elapsed = self.elapsed()?;
        let phase = cycle_progress(elapsed, self.config.period);
        let sample = self.config.waveform.sample(phase, self.config.easing);
        self.last_sample = Some(sample);
        self.frames += 1;
        trace!(
            elapsed_ms = elapsed.as_millis() as u64,
            position = sample.position,
            "Scan line tick"
        );

        Some(self.frame())
    }

    /// Describe the overlay as it currently stands without advancing time
    pub fn frame(&self) -> OverlayFrame {
        let scan_area = (!self.scan_area.is_empty()).then_some(self.scan_area);
        let line = self.last_sample.and_then(|sample| self.line_at(sample));
        OverlayFrame {
            scan_area,
            line,
            state: self.state,
        }
    }

    /// Draw onto `surface`, advancing the animation first when running
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let frame = match self.tick() {
            Some(frame) => frame,
            None => self.frame(),
        };
        surface.present(&frame);
    }

    fn line_at(&self, sample: LineSample) -> Option<ScanLine> {
        let track = self.line_track;
        if track.is_empty() {
            return None;
        }
        let y = lerp(track.y, track.bottom(), sample.position).clamp(track.y, track.bottom());
        Some(ScanLine {
            x: track.x,
            y,
            width: track.width,
            thickness: self.config.line_thickness.min(track.height),
            opacity: sample.opacity,
            position: sample.position,
            track,
        })
    }
}

fn normalize(what: &str, rect: ScanRect) -> ScanRect {
    if rect.is_malformed() {
        warn!(?rect, "Malformed {} normalized", what);
    }
    rect.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn overlay_300() -> (ScanOverlay<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut overlay = ScanOverlay::new(clock.clone());
        overlay.set_scan_area(ScanRect::new(0.0, 0.0, 300.0, 300.0));
        overlay.set_scan_line_track(ScanRect::new(0.0, 0.0, 300.0, 300.0));
        (overlay, clock)
    }

    #[test]
    fn test_initial_state_idle() {
        let (overlay, _) = overlay_300();
        assert_eq!(overlay.state(), AnimationState::Idle);
        assert!(!overlay.needs_frame());
        assert!(overlay.line_position().is_none());
        assert!(overlay.elapsed().is_none());
    }

    #[test]
    fn test_half_period_is_half_way() {
        let (mut overlay, clock) = overlay_300();
        overlay.start_animating();
        clock.advance(Duration::from_secs(1));

        let frame = overlay.tick().unwrap();
        let line = frame.line.unwrap();
        assert!((line.position - 0.5).abs() < 1e-9);
        assert!((line.y - 150.0).abs() < 1e-9);
        assert_eq!(line.x, 0.0);
        assert_eq!(line.width, 300.0);
    }

    #[test]
    fn test_start_twice_keeps_elapsed() {
        let (mut overlay, clock) = overlay_300();
        overlay.start_animating();
        clock.advance(Duration::from_millis(600));
        overlay.start_animating();
        clock.advance(Duration::from_millis(400));

        assert_eq!(overlay.state(), AnimationState::Running);
        assert_eq!(overlay.elapsed(), Some(Duration::from_secs(1)));
        overlay.tick();
        assert!((overlay.line_position().unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_stop_twice_is_idle() {
        let (mut overlay, _) = overlay_300();
        overlay.stop_animating();
        assert_eq!(overlay.state(), AnimationState::Idle);
        overlay.start_animating();
        overlay.stop_animating();
        overlay.stop_animating();
        assert_eq!(overlay.state(), AnimationState::Idle);
    }

    #[test]
    fn test_line_stays_in_track() {
        let (mut overlay, clock) = overlay_300();
        let track = ScanRect::new(10.0, 20.0, 100.0, 57.0);
        overlay.set_scan_line_track(track);
        overlay.start_animating();

        for waveform in [Waveform::Ramp, Waveform::PingPong, Waveform::Pulse] {
            overlay.set_config(OverlayConfig {
                waveform,
                easing: EasingType::EaseOut,
                ..Default::default()
            });
            for _ in 0..500 {
                clock.advance(Duration::from_millis(17));
                let line = overlay.tick().unwrap().line.unwrap();
                assert!(line.y >= track.y && line.y <= track.bottom(), "{:?} y={}", waveform, line.y);
                assert_eq!(line.x, track.x);
                assert_eq!(line.width, track.width);
            }
        }
    }

    #[test]
    fn test_frozen_after_stop() {
        let (mut overlay, clock) = overlay_300();
        overlay.start_animating();
        clock.advance(Duration::from_millis(700));
        overlay.tick();
        overlay.stop_animating();

        let at_stop = overlay.line_position();
        assert!(at_stop.is_some());
        for step in [0, 100, 400] {
            clock.advance(Duration::from_millis(step));
            assert!(overlay.tick().is_none());
            assert_eq!(overlay.line_position(), at_stop);
            assert_eq!(overlay.frame().line.map(|l| l.position), at_stop);
        }
    }

    #[test]
    fn test_hidden_after_stop() {
        let clock = ManualClock::new();
        let mut overlay = ScanOverlay::with_config(
            clock.clone(),
            OverlayConfig {
                stop_behavior: StopBehavior::Hide,
                ..Default::default()
            },
        );
        overlay.set_scan_line_track(ScanRect::new(0.0, 0.0, 50.0, 50.0));
        overlay.start_animating();
        clock.advance(Duration::from_millis(300));
        overlay.tick();
        overlay.stop_animating();

        clock.advance(Duration::from_millis(500));
        assert!(overlay.tick().is_none());
        assert!(overlay.line_position().is_none());
        assert!(overlay.frame().line.is_none());
    }

    #[test]
    fn test_track_change_applies_next_tick() {
        let (mut overlay, clock) = overlay_300();
        overlay.start_animating();
        clock.advance(Duration::from_millis(500));
        overlay.tick();

        let moved = ScanRect::new(100.0, 400.0, 80.0, 40.0);
        overlay.set_scan_line_track(moved);
        clock.advance(Duration::from_millis(500));
        let line = overlay.tick().unwrap().line.unwrap();
        assert_eq!(line.x, 100.0);
        assert_eq!(line.width, 80.0);
        assert!((line.y - 420.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_size_area_still_starts() {
        let clock = ManualClock::new();
        let mut overlay = ScanOverlay::new(clock.clone());
        overlay.set_scan_area(ScanRect::ZERO);
        overlay.start_animating();
        assert_eq!(overlay.state(), AnimationState::Running);

        clock.advance(Duration::from_millis(100));
        let frame = overlay.tick().unwrap();
        assert!(frame.scan_area.is_none());
        assert!(frame.line.is_none());
    }

    #[test]
    fn test_flat_track_has_no_line() {
        let (mut overlay, clock) = overlay_300();
        overlay.set_scan_line_track(ScanRect::new(0.0, 0.0, 300.0, 0.0));
        overlay.start_animating();
        clock.advance(Duration::from_millis(500));

        let frame = overlay.tick().unwrap();
        assert!(frame.scan_area.is_some());
        assert!(frame.line.is_none());
        assert!(overlay.frame().line.is_none());
    }

    #[test]
    fn test_thick_line_carries_track() {
        let clock = ManualClock::new();
        let mut overlay = ScanOverlay::with_config(
            clock.clone(),
            OverlayConfig {
                line_thickness: 3.0,
                ..Default::default()
            },
        );
        let track = ScanRect::new(2.0, 1.0, 10.0, 6.0);
        overlay.set_scan_line_track(track);
        overlay.start_animating();
        clock.advance(Duration::from_millis(1990));

        let line = overlay.tick().unwrap().line.unwrap();
        assert_eq!(line.track, track);
        assert_eq!(line.thickness, 3.0);
        assert!(line.y <= track.bottom());

        overlay.set_scan_line_track(ScanRect::new(0.0, 0.0, 10.0, 2.0));
        clock.advance(Duration::from_millis(1));
        assert_eq!(overlay.tick().unwrap().line.unwrap().thickness, 2.0);
    }

    #[test]
    fn test_negative_rect_normalized() {
        let (mut overlay, _) = overlay_300();
        overlay.set_scan_area(ScanRect::new(5.0, 5.0, -10.0, 20.0));
        assert_eq!(overlay.scan_area(), ScanRect::new(5.0, 5.0, 0.0, 20.0));
        assert!(overlay.frame().scan_area.is_none());
    }

    #[test]
    fn test_restart_begins_new_sweep() {
        let (mut overlay, clock) = overlay_300();
        overlay.start_animating();
        clock.advance(Duration::from_millis(1500));
        overlay.stop_animating();
        clock.advance(Duration::from_secs(7));
        overlay.start_animating();
        assert_eq!(overlay.elapsed(), Some(Duration::ZERO));
        assert_eq!(overlay.line_position(), Some(0.0));
        let line = overlay.frame().line.unwrap();
        assert_eq!(line.y, 0.0);

        clock.advance(Duration::from_millis(500));
        overlay.tick();
        assert!((overlay.line_position().unwrap() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_period_change_keeps_position() {
        let (mut overlay, clock) = overlay_300();
        overlay.start_animating();
        clock.advance(Duration::from_millis(500));
        overlay.tick();

        overlay.set_config(OverlayConfig {
            period: Duration::from_secs(4),
            ..Default::default()
        });
        overlay.tick();
        assert!((overlay.line_position().unwrap() - 0.25).abs() < 1e-6);

        clock.advance(Duration::from_secs(1));
        overlay.tick();
        assert!((overlay.line_position().unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_render_presents_static_frame_when_idle() {
        let (mut overlay, _) = overlay_300();
        let mut seen = Vec::new();
        let mut surface = |frame: &OverlayFrame| seen.push(*frame);
        overlay.render(&mut surface);

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].state, AnimationState::Idle);
        assert!(seen[0].scan_area.is_some());
        assert_eq!(overlay.frames_rendered(), 0);
    }

    #[test]
    fn test_from_app_config_clamps() {
        let mut config = AppConfig::default();
        config.animation.period_ms = 0;
        config.layout.line_thickness = -2.0;
        let overlay_config = OverlayConfig::from_app_config(&config);
        assert_eq!(overlay_config.period, Duration::from_millis(1));
        assert_eq!(overlay_config.line_thickness, 1.0);
    }
}
