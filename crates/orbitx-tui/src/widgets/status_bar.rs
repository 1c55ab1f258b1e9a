use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

const HELP_HINT: &str = " q:quit space:pause n:next ";

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(Paragraph::new(Self::line(app, area.width)), area);
    }

    /// Status line: readout (or message) on the left, key hints on the right
    pub fn line(app: &App, width: u16) -> Line<'static> {
        let (left, left_style) = if let Some(msg) = &app.status_message {
            (format!(" {}", msg), app.theme.status())
        } else if !app.session.telemetry_enabled() {
            (" ORBIT X".to_string(), app.theme.status())
        } else if let Some(reading) = app.session.telemetry() {
            (format!(" {}", reading), app.theme.status_telemetry())
        } else {
            (" ACQUIRING SIGNAL...".to_string(), app.theme.status_hint())
        };

        let used = left.width() + HELP_HINT.width();
        let padding = (width as usize).saturating_sub(used);

        Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), app.theme.status()),
            Span::styled(HELP_HINT, app.theme.status_hint()),
        ])
    }
}
