use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;
use tracing::{debug, info};

use scanveil_core::layout::{calculate_scan_rect, line_track_for};
use scanveil_core::{AppConfig, Clock, OverlayConfig, OverlayFrame, ScanOverlay, ScanRect, SystemClock};

use crate::input::Action;
use crate::theme::Theme;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

const MIN_PERIOD: Duration = Duration::from_millis(250);
const MAX_PERIOD: Duration = Duration::from_secs(10);

/// Scan session controller for the terminal preview
///
/// Plays the part of the camera session owner: it starts the overlay when a
/// session begins, stops it when the session pauses, and relayouts it when
/// the terminal changes size.
pub struct App<C: Clock = SystemClock> {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub overlay: ScanOverlay<C>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Overlay area the current geometry was derived from
    bounds: Option<Rect>,
}

impl App<SystemClock> {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        Self::with_clock(config, theme, SystemClock::new())
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: Arc<AppConfig>, theme: Theme, clock: C) -> Self {
        let overlay = ScanOverlay::with_config(clock, OverlayConfig::from_app_config(&config));
        Self {
            config,
            theme,
            overlay,
            status_message: None,
            should_quit: false,
            bounds: None,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.overlay.is_animating()
    }

    pub fn begin_session(&mut self) {
        if self.is_scanning() {
            return;
        }
        self.overlay.start_animating();
        self.status_message = None;
        info!("Scan session started");
    }

    pub fn end_session(&mut self) {
        if !self.is_scanning() {
            return;
        }
        self.overlay.stop_animating();
        info!("Scan session paused");
    }

    /// Recompute scan area and line track for a new overlay area
    ///
    /// Geometry is laid out in square units, then mapped back to cells.
    pub fn resize(&mut self, area: Rect) {
        if self.bounds == Some(area) {
            return;
        }
        self.bounds = Some(area);

        let layout = &self.config.layout;
        let bounds = ScanRect::new(0.0, 0.0, area.width as f64, area.height as f64 * CELL_ASPECT);
        let square = calculate_scan_rect(bounds, layout);
        let scan_area = ScanRect::new(
            square.x,
            square.y / CELL_ASPECT,
            square.width,
            square.height / CELL_ASPECT,
        );

        self.overlay.set_scan_area(scan_area);
        self.overlay
            .set_scan_line_track(line_track_for(scan_area, layout.track_inset));
        debug!(width = area.width, height = area.height, "Overlay relayout");
    }

    /// Advance the animation for this frame
    pub fn update(&mut self) -> Option<OverlayFrame> {
        self.overlay.tick()
    }

    /// Frame to draw, whether or not the overlay is animating
    pub fn current_frame(&self) -> OverlayFrame {
        self.overlay.frame()
    }

    pub fn next_waveform(&mut self) {
        let mut config = self.overlay.config().clone();
        config.waveform = config.waveform.next();
        self.status_message = Some(format!("Waveform: {}", config.waveform.label()));
        self.overlay.set_config(config);
    }

    /// Scale the sweep period, keeping it within a usable range
    pub fn scale_period(&mut self, factor: f64) {
        let mut config = self.overlay.config().clone();
        config.period = config.period.mul_f64(factor).clamp(MIN_PERIOD, MAX_PERIOD);
        self.status_message = Some(format!("Period: {:.2}s", config.period.as_secs_f64()));
        self.overlay.set_config(config);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleScan => {
                if self.is_scanning() {
                    self.end_session();
                } else {
                    self.begin_session();
                }
            }
            Action::StartScan => self.begin_session(),
            Action::StopScan => self.end_session(),
            Action::NextWaveform => self.next_waveform(),
            Action::SpeedUp => self.scale_period(0.8),
            Action::SlowDown => self.scale_period(1.25),
            Action::None => {}
        }
    }
}
