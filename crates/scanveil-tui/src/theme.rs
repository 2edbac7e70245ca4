use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Surface
    pub background: Color,
    pub backdrop: Color,

    // Overlay
    pub border: Color,
    pub line: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,
    pub muted: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::scanner::red()
    }
}

/// Mix `fg` into `bg` by `alpha` (0 = all background, 1 = all foreground)
///
/// Only RGB colors can be mixed; anything else snaps to whichever side
/// dominates.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * alpha).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}
