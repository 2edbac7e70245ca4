//! Gruvbox theme
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x28, 0x28),
        backdrop: Color::Rgb(0x1d, 0x20, 0x21),
        border: Color::Rgb(0xd4, 0xbe, 0x98),
        line: Color::Rgb(0xea, 0x69, 0x62),
        status_bg: Color::Rgb(0x45, 0x40, 0x3d),
        status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0xa9, 0xb6, 0x65),
    }
}
