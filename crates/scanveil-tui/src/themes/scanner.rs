//! Scanner theme: red line over a dark preview, the classic barcode-reader look

use ratatui::style::Color;
use crate::theme::Theme;

pub fn red() -> Theme {
    Theme {
        background: Color::Rgb(0x12, 0x12, 0x14),
        backdrop: Color::Rgb(0x06, 0x06, 0x07),
        border: Color::Rgb(0xe6, 0xe6, 0xe6),
        line: Color::Rgb(0xff, 0x2a, 0x2a),
        status_bg: Color::Rgb(0x26, 0x26, 0x2a),
        status_fg: Color::Rgb(0xe6, 0xe6, 0xe6),
        muted: Color::Rgb(0x8a, 0x8a, 0x90),
        accent: Color::Rgb(0xfb, 0xad, 0x1b),
    }
}
