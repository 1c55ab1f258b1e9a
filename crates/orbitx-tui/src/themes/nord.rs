//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        foreground: Color::Rgb(0xec, 0xef, 0xf4), // nord6
        accent: Color::Rgb(0x88, 0xc0, 0xd0),     // nord8
        dud: Color::Rgb(0x4c, 0x56, 0x6a),        // nord3
        muted: Color::Rgb(0xd8, 0xde, 0xe9),      // nord4
        telemetry: Color::Rgb(0x8f, 0xbc, 0xbb),  // nord7
        status_bg: Color::Rgb(0x3b, 0x42, 0x52),  // nord1
    }
}
