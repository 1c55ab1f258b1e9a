use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use orbitx_core::{AppConfig, LandingSession, SessionTick};

use crate::input::Action;
use crate::theme::Theme;

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Title rotation and telemetry
    pub session: LandingSession,
    pub theme: Theme,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message, replaces the telemetry readout until cleared
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Result<Self> {
        let session = LandingSession::new(&config)?;
        Ok(Self {
            config,
            session,
            theme,
            should_quit: false,
            status_message: None,
        })
    }

    pub fn start(&mut self, now: Instant) {
        self.session.start(now);
    }

    pub fn is_paused(&self) -> bool {
        !self.session.is_running()
    }

    /// Advance animations by one frame
    pub fn tick(&mut self, now: Instant) -> SessionTick {
        let tick = self.session.tick(now);
        if tick.telemetry_changed {
            self.status_message = None;
        }
        tick
    }

    /// True while the title is scrambling and frames should come at full rate
    pub fn needs_fast_update(&self) -> bool {
        self.session.needs_fast_update()
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => {
                self.session.toggle(now);
                if self.is_paused() {
                    self.set_status("PAUSED");
                } else {
                    self.clear_status();
                }
            }
            Action::NextPhrase => {
                if self.is_paused() {
                    self.set_status("PAUSED - press space to resume");
                } else {
                    self.session.skip();
                }
            }
            Action::None => {}
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
