use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use scanveil_core::{
    AppConfig, Clock, ManualClock, OverlayConfig, OverlayFrame, ScanOverlay, ScanRect, SystemClock,
};

/// Options for a headless trace run
#[derive(Debug, Clone)]
pub struct TraceOptions {
    /// Number of ticks to sample
    pub frames: u32,
    /// Time between ticks
    pub interval: Duration,
    /// Surface bounds the scan area is laid out in
    pub width: f64,
    pub height: f64,
    /// Stop the session before this tick (0-based)
    pub stop_after: Option<u32>,
    /// Emit one JSON object per tick instead of text
    pub json: bool,
}

/// One sampled tick
#[derive(Debug, Serialize)]
struct TraceRow {
    frame: u32,
    elapsed_ms: u64,
    #[serde(flatten)]
    overlay: OverlayFrame,
}

/// Drive the overlay with a simulated clock, so output is reproducible
pub fn run_simulated<W: Write>(config: &AppConfig, opts: &TraceOptions, out: &mut W) -> Result<()> {
    let clock = ManualClock::new();
    let mut overlay = prepare(clock.clone(), config, opts);

    for frame in 0..opts.frames {
        clock.advance(opts.interval);
        sample(&mut overlay, frame, clock.now(), opts, out)?;
    }

    info!(frames = overlay.frames_rendered(), "Trace finished");
    Ok(())
}

/// Drive the overlay in real time from a tokio interval
pub async fn run_realtime<W: Write>(config: &AppConfig, opts: &TraceOptions, out: &mut W) -> Result<()> {
    let clock = SystemClock::new();
    let mut overlay = prepare(clock, config, opts);
    let mut ticker = tokio::time::interval(opts.interval.max(Duration::from_millis(1)));
    // First tick of a tokio interval completes immediately
    ticker.tick().await;

    for frame in 0..opts.frames {
        ticker.tick().await;
        sample(&mut overlay, frame, clock.now(), opts, out)?;
    }

    info!(frames = overlay.frames_rendered(), "Trace finished");
    Ok(())
}

fn prepare<C: Clock>(clock: C, config: &AppConfig, opts: &TraceOptions) -> ScanOverlay<C> {
    let mut overlay = ScanOverlay::with_config(clock, OverlayConfig::from_app_config(config));
    overlay.relayout(ScanRect::new(0.0, 0.0, opts.width, opts.height), &config.layout);
    overlay.start_animating();
    overlay
}

fn sample<C: Clock, W: Write>(
    overlay: &mut ScanOverlay<C>,
    frame: u32,
    now: Duration,
    opts: &TraceOptions,
    out: &mut W,
) -> Result<()> {
    if opts.stop_after == Some(frame) {
        overlay.stop_animating();
    }

    let mut rows = Vec::with_capacity(1);
    overlay.render(&mut |f: &OverlayFrame| rows.push(*f));

    for overlay_frame in rows {
        let row = TraceRow {
            frame,
            elapsed_ms: now.as_millis() as u64,
            overlay: overlay_frame,
        };
        if opts.json {
            serde_json::to_writer(&mut *out, &row)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", format_row(&row))?;
        }
    }
    Ok(())
}

fn format_row(row: &TraceRow) -> String {
    let state = if row.overlay.state == scanveil_core::AnimationState::Running {
        "running"
    } else {
        "idle"
    };
    let line = match row.overlay.line {
        Some(line) => format!(
            "y={:>8.2} pos={:.3} opacity={:.2}",
            line.y, line.position, line.opacity
        ),
        None => "line=hidden".to_string(),
    };
    format!("{:>5} {:>7}ms {:<7} {}", row.frame, row.elapsed_ms, state, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanveil_core::{StopBehavior, Waveform};

    fn opts() -> TraceOptions {
        TraceOptions {
            frames: 4,
            interval: Duration::from_millis(500),
            width: 400.0,
            height: 800.0,
            stop_after: None,
            json: false,
        }
    }

    fn lines(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_simulated_trace_ramp() {
        let mut out = Vec::new();
        run_simulated(&AppConfig::default(), &opts(), &mut out).unwrap();
        let lines = lines(out);

        // Scan area is 320x240 at y=280 for 400x800 bounds
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("y=  340.00 pos=0.250"), "{}", lines[0]);
        assert!(lines[1].contains("y=  400.00 pos=0.500"), "{}", lines[1]);
        assert!(lines[3].contains("y=  280.00 pos=0.000"), "{}", lines[3]);
        assert!(lines.iter().all(|l| l.contains("running")));
    }

    #[test]
    fn test_simulated_trace_stop_freezes() {
        let mut out = Vec::new();
        let opts = TraceOptions {
            frames: 5,
            stop_after: Some(2),
            ..opts()
        };
        run_simulated(&AppConfig::default(), &opts, &mut out).unwrap();
        let lines = lines(out);

        assert!(lines[2].contains("idle"));
        let frozen: Vec<&str> = lines[2..].iter().map(|l| l.split("idle").nth(1).unwrap()).collect();
        assert!(frozen.iter().all(|l| *l == frozen[0]));
        assert!(frozen[0].contains("pos=0.500"));
    }

    #[test]
    fn test_simulated_trace_hide_on_stop() {
        let mut config = AppConfig::default();
        config.animation.stop_behavior = StopBehavior::Hide;
        let opts = TraceOptions {
            frames: 3,
            stop_after: Some(1),
            ..opts()
        };
        let mut out = Vec::new();
        run_simulated(&config, &opts, &mut out).unwrap();
        let lines = lines(out);
        assert!(lines[1].ends_with("line=hidden"));
        assert!(lines[2].ends_with("line=hidden"));
    }

    #[test]
    fn test_simulated_trace_json() {
        let mut config = AppConfig::default();
        config.animation.waveform = Waveform::Pulse;
        let opts = TraceOptions {
            frames: 2,
            json: true,
            ..opts()
        };
        let mut out = Vec::new();
        run_simulated(&config, &opts, &mut out).unwrap();

        let rows: Vec<serde_json::Value> = lines(out)
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows[0]["frame"], 0);
        assert_eq!(rows[0]["state"], "running");
        assert_eq!(rows[0]["line"]["position"], 0.5);
        assert_eq!(rows[1]["line"]["opacity"], 1.0);
        assert_eq!(rows[1]["scan_area"]["width"], 320.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_realtime_trace_frame_count() {
        let opts = TraceOptions {
            frames: 3,
            interval: Duration::from_millis(50),
            stop_after: Some(2),
            ..opts()
        };
        let mut out = Vec::new();
        run_realtime(&AppConfig::default(), &opts, &mut out).await.unwrap();
        let lines = lines(out);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("running"));
        assert!(lines[2].contains("idle"));
    }
}
