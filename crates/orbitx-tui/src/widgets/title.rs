use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use orbitx_core::ScrambleFrame;

use crate::app::App;
use crate::theme::Theme;

pub struct TitleWidget;

impl TitleWidget {
    /// Render the hero title and tagline vertically centered in `area`
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(Block::default().style(app.theme.base()), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1), // title
                Constraint::Length(1),
                Constraint::Length(1), // tagline
                Constraint::Fill(1),
            ])
            .split(area);

        let title = Paragraph::new(title_line(app.session.title(), &app.theme))
            .alignment(Alignment::Center);
        frame.render_widget(title, rows[1]);

        let tagline = Paragraph::new(Line::from(Span::styled(
            app.config.ui.tagline.clone(),
            app.theme.tagline(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(tagline, rows[3]);
    }
}

/// Styled line for a scramble frame; glyphs still scrambling get the dud style
pub fn title_line(title: &ScrambleFrame, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span<'static>> = title
        .runs()
        .into_iter()
        .map(|(text, scrambling)| {
            let style = if scrambling { theme.dud() } else { theme.title() };
            Span::styled(text, style)
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitx_core::scramble::FrameCell;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    #[test]
    fn test_title_line_styles_runs() {
        let theme = Theme::default();
        let frame = ScrambleFrame::from(vec![
            FrameCell::settled('O'),
            FrameCell::scrambling('#'),
            FrameCell::scrambling('_'),
            FrameCell::settled('X'),
        ]);
        let line = title_line(&frame, &theme);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "O");
        assert_eq!(line.spans[1].content, "#_");
        assert_eq!(line.spans[1].style, theme.dud());
        assert_eq!(line.spans[2].style, theme.title());
    }

    #[test]
    fn test_renders_settled_title_and_tagline() {
        let mut config = orbitx_core::AppConfig::default();
        config.scramble.seed = Some(3);
        let mut app = App::new(Arc::new(config), Theme::default()).unwrap();
        let mut now = Instant::now();
        app.start(now);
        for _ in 0..100 {
            app.tick(now);
            now += Duration::from_millis(16);
        }

        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
        terminal
            .draw(|frame| TitleWidget::render(frame, frame.area(), &app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect();
        assert!(rows.iter().any(|row| row.trim() == "TRANSCEND"));
        assert!(rows.iter().any(|row| row.trim() == "BEYOND THE EDGE OF THE KNOWN"));
    }
}
