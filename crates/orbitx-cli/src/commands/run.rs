use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use orbitx_core::AppConfig;
use orbitx_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    load_theme,
    widgets::{StatusBarWidget, TitleWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(config.clone(), theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("ORBIT X"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let frame_duration = app.config.scramble.frame_duration();
    let event_handler = EventHandler::new(app.config.ui.tick_rate_ms, frame_duration);

    app.start(Instant::now());
    tracing::info!(
        phrases = app.config.phrases.items.len(),
        fps = app.config.scramble.animation_fps,
        "Landing screen running"
    );

    let mut last_frame: Option<Instant> = None;
    let mut needs_fast_update = false;

    loop {
        // Advance at most one frame per refresh period, whatever woke us up
        let now = Instant::now();
        if last_frame.map_or(true, |t| now.duration_since(t) >= frame_duration) {
            app.tick(now);
            last_frame = Some(now);
        }

        terminal.draw(|frame| draw(frame, app))?;

        // Use the animation frame rate while the title is scrambling
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(AppEvent::Key(key)) = event {
            app.handle_action(handle_key_event(key), Instant::now());
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Landing screen closed");
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    TitleWidget::render(frame, layout[0], app);
    StatusBarWidget::render(frame, layout[1], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitx_tui::Theme;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_fills_screen() {
        let mut config = AppConfig::default();
        config.scramble.seed = Some(1);
        let app = App::new(Arc::new(config), Theme::default()).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let status: String = (0..60).map(|x| buffer[(x, 11)].symbol().to_string()).collect();
        assert!(status.starts_with(" ACQUIRING SIGNAL"));
        assert!(status.trim_end().ends_with("n:next"));
    }
}
