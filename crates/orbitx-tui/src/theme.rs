use ratatui::style::{Color, Modifier, Style};

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Settled title text
    pub accent: Color,
    /// Title glyphs that are still scrambling
    pub dud: Color,
    pub muted: Color,
    pub telemetry: Color,
    pub status_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::void()
    }
}

impl Theme {
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dud(&self) -> Style {
        Style::default().fg(self.dud).bg(self.background)
    }

    pub fn tagline(&self) -> Style {
        Style::default().fg(self.muted).bg(self.background)
    }

    pub fn status(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.status_bg)
    }

    pub fn status_telemetry(&self) -> Style {
        Style::default().fg(self.telemetry).bg(self.status_bg)
    }

    pub fn status_hint(&self) -> Style {
        Style::default().fg(self.muted).bg(self.status_bg)
    }
}
