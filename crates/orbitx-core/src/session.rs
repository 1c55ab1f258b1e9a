//! Landing screen session: one per run, owns all animated state

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AppConfig;
use crate::cycle::PhraseCycle;
use crate::scramble::{ScrambleAnimator, ScrambleFrame};
use crate::telemetry::{Telemetry, TelemetryReading};

/// What changed during one `tick`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionTick {
    pub title_changed: bool,
    pub phrase_started: bool,
    pub telemetry_changed: bool,
}

impl SessionTick {
    pub fn needs_redraw(&self) -> bool {
        self.title_changed || self.telemetry_changed
    }
}

pub struct LandingSession<R = StdRng> {
    animator: ScrambleAnimator<R>,
    cycle: PhraseCycle,
    telemetry: Option<Telemetry>,
    rng: R,
    running: bool,
}

impl LandingSession<StdRng> {
    /// Build a session from config; `scramble.seed` makes runs reproducible
    pub fn new(config: &AppConfig) -> crate::Result<Self> {
        config.validate()?;
        let (animator_rng, telemetry_rng) = match config.scramble.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_entropy(), StdRng::from_entropy()),
        };
        Self::with_rngs(config, animator_rng, telemetry_rng)
    }
}

impl<R: Rng> LandingSession<R> {
    pub fn with_rngs(config: &AppConfig, animator_rng: R, telemetry_rng: R) -> crate::Result<Self> {
        let animator = ScrambleAnimator::with_rng(config.scramble.clone(), animator_rng)?;
        let telemetry = config
            .telemetry
            .enabled
            .then(|| Telemetry::new(&config.telemetry));

        Ok(Self {
            animator,
            cycle: PhraseCycle::new(&config.phrases),
            telemetry,
            rng: telemetry_rng,
            running: false,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or resume) the phrase rotation and telemetry
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.cycle.start();
        if let Some(telemetry) = self.telemetry.as_mut() {
            telemetry.start(now);
        }
        tracing::info!("Landing session started");
    }

    /// Freeze everything where it is
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.cycle.stop();
        self.animator.cancel();
        if let Some(telemetry) = self.telemetry.as_mut() {
            telemetry.stop();
        }
        tracing::info!("Landing session stopped");
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Jump to the next phrase without waiting for the hold delay
    pub fn skip(&mut self) {
        self.cycle.skip();
    }

    /// Advance one frame: title animation, phrase rotation, telemetry
    pub fn tick(&mut self, now: Instant) -> SessionTick {
        let mut tick = SessionTick::default();
        if !self.running {
            return tick;
        }

        tick.title_changed = self.animator.update();

        if let Some(phrase) = self.cycle.tick(now, &mut self.animator) {
            tracing::debug!(phrase, "Phrase started");
            tick.phrase_started = true;
            tick.title_changed = true;
        }

        if let Some(telemetry) = self.telemetry.as_mut() {
            tick.telemetry_changed = telemetry.tick(now, &mut self.rng);
        }

        tick
    }

    /// True while a scramble pass is in flight
    pub fn needs_fast_update(&self) -> bool {
        self.running && self.animator.is_animating()
    }

    /// Current hero title frame
    pub fn title(&self) -> &ScrambleFrame {
        self.animator.frame()
    }

    pub fn telemetry(&self) -> Option<&TelemetryReading> {
        self.telemetry.as_ref().and_then(|t| t.reading())
    }

    pub fn telemetry_enabled(&self) -> bool {
        self.telemetry.is_some()
    }

    pub fn animator(&self) -> &ScrambleAnimator<R> {
        &self.animator
    }

    pub fn cycle(&self) -> &PhraseCycle {
        &self.cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    fn session() -> LandingSession {
        let mut config = AppConfig::default();
        config.scramble.seed = Some(2024);
        LandingSession::new(&config).unwrap()
    }

    #[test]
    fn test_idle_until_started() {
        let mut session = session();
        let tick = session.tick(Instant::now());
        assert_eq!(tick, SessionTick::default());
        assert!(session.title().is_empty());
        assert!(!session.needs_fast_update());
    }

    #[test]
    fn test_first_tick_starts_first_phrase() {
        let mut session = session();
        let now = Instant::now();
        session.start(now);
        let tick = session.tick(now);
        assert!(tick.phrase_started);
        assert!(tick.title_changed);
        assert!(session.needs_fast_update());
    }

    #[test]
    fn test_title_settles_and_telemetry_updates() {
        let mut session = session();
        let mut now = Instant::now();
        session.start(now);

        let mut telemetry_updates = 0;
        for _ in 0..150 {
            let tick = session.tick(now);
            if tick.telemetry_changed {
                telemetry_updates += 1;
            }
            now += FRAME;
        }

        // 150 frames is past the longest possible pass and past one telemetry interval
        assert_eq!(session.title().text(), "TRANSCEND");
        assert!(!session.needs_fast_update());
        assert_eq!(telemetry_updates, 1);
        assert!(session.telemetry().is_some());
    }

    #[test]
    fn test_stop_freezes_and_resume_continues() {
        let mut session = session();
        let mut now = Instant::now();
        session.start(now);
        for _ in 0..5 {
            session.tick(now);
            now += FRAME;
        }

        session.stop();
        let frozen = session.title().clone();
        assert!(!session.needs_fast_update());
        for _ in 0..10 {
            assert_eq!(session.tick(now), SessionTick::default());
            now += FRAME;
        }
        assert_eq!(session.title(), &frozen);

        session.toggle(now);
        assert!(session.is_running());
        let tick = session.tick(now);
        assert!(tick.phrase_started);
        assert_eq!(session.cycle().next_phrase(), Some("ORBIT X"));
    }

    #[test]
    fn test_telemetry_can_be_disabled() {
        let mut config = AppConfig::default();
        config.telemetry.enabled = false;
        config.scramble.seed = Some(1);
        let mut session = LandingSession::new(&config).unwrap();
        let mut now = Instant::now();
        session.start(now);
        for _ in 0..200 {
            assert!(!session.tick(now).telemetry_changed);
            now += FRAME;
        }
        assert!(!session.telemetry_enabled());
        assert!(session.telemetry().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::default();
        config.phrases.items.clear();
        assert!(LandingSession::new(&config).is_err());
    }
}
