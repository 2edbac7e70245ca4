//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        backdrop: Color::Rgb(0x24, 0x29, 0x33),
        border: Color::Rgb(0xd8, 0xde, 0xe9),     // nord4
        line: Color::Rgb(0x88, 0xc0, 0xd0),       // nord8
        status_bg: Color::Rgb(0x3b, 0x42, 0x52),  // nord1
        status_fg: Color::Rgb(0xec, 0xef, 0xf4),  // nord6
        muted: Color::Rgb(0x5e, 0x68, 0x7a),
        accent: Color::Rgb(0xeb, 0xcb, 0x8b),     // nord13
    }
}
