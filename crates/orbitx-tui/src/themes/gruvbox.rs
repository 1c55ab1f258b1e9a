//! Gruvbox theme
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x28, 0x28),
        foreground: Color::Rgb(0xd4, 0xbe, 0x98),
        accent: Color::Rgb(0x89, 0xb4, 0x82),  // aqua
        dud: Color::Rgb(0x7c, 0x6f, 0x64),     // grey0
        muted: Color::Rgb(0x92, 0x83, 0x74),   // grey1
        telemetry: Color::Rgb(0xd8, 0xa6, 0x57), // yellow
        status_bg: Color::Rgb(0x45, 0x40, 0x3d), // bg2
    }
}
