//! Void theme: black space with a cyan wireframe accent

use ratatui::style::Color;
use crate::theme::Theme;

pub fn void() -> Theme {
    Theme {
        background: Color::Rgb(0x00, 0x00, 0x00),
        foreground: Color::Rgb(0xe6, 0xe6, 0xe6),
        accent: Color::Rgb(0x00, 0xf3, 0xff),
        dud: Color::Rgb(0x3a, 0x6f, 0x73),
        muted: Color::Rgb(0x6b, 0x6b, 0x6b),
        telemetry: Color::Rgb(0x00, 0xf3, 0xff),
        status_bg: Color::Rgb(0x0d, 0x11, 0x17),
    }
}
