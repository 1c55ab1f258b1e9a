//! Hero title phrase rotation
//!
//! Starts a scramble pass for each phrase in turn, holding each settled
//! phrase for a fixed delay before moving on.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::PhraseConfig;
use crate::scramble::{Completion, ScrambleAnimator, ScrambleOutcome};

enum CycleState {
    Stopped,
    /// Next phrase starts on the next tick
    Due,
    /// Waiting for the pass started by this cycle
    Scrambling(Completion),
    /// Current phrase settled; next one starts at the given instant
    Holding(Instant),
}

pub struct PhraseCycle {
    phrases: Vec<String>,
    /// Index of the next phrase to show
    counter: usize,
    hold: Duration,
    state: CycleState,
}

impl PhraseCycle {
    pub fn new(config: &PhraseConfig) -> Self {
        Self {
            phrases: config.items.clone(),
            counter: 0,
            hold: config.hold(),
            state: CycleState::Stopped,
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Phrase the next pass will scramble to
    pub fn next_phrase(&self) -> Option<&str> {
        self.phrases.get(self.counter).map(String::as_str)
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.state, CycleState::Stopped)
    }

    pub fn is_scrambling(&self) -> bool {
        matches!(self.state, CycleState::Scrambling(_))
    }

    /// Begin cycling; the first phrase starts on the next tick
    pub fn start(&mut self) {
        if !self.is_running() {
            self.state = CycleState::Due;
        }
    }

    /// Stop scheduling passes. A pass already in flight is left to the animator.
    pub fn stop(&mut self) {
        self.state = CycleState::Stopped;
    }

    /// Move to the next phrase on the next tick, even mid-pass
    pub fn skip(&mut self) {
        if self.is_running() {
            self.state = CycleState::Due;
        }
    }

    /// Advance the rotation. Returns the phrase whose pass was just started.
    pub fn tick<R: Rng>(&mut self, now: Instant, animator: &mut ScrambleAnimator<R>) -> Option<&str> {
        if let CycleState::Scrambling(completion) = &mut self.state {
            match completion.try_outcome() {
                None => return None,
                Some(ScrambleOutcome::Completed) => {
                    self.state = CycleState::Holding(now + self.hold);
                }
                Some(ScrambleOutcome::Cancelled) => {
                    tracing::debug!("Phrase pass was cancelled, moving on");
                    self.state = CycleState::Due;
                }
            }
        }

        if let CycleState::Holding(until) = self.state {
            if now >= until {
                self.state = CycleState::Due;
            }
        }

        if !matches!(self.state, CycleState::Due) || self.phrases.is_empty() {
            return None;
        }

        let index = self.counter;
        let completion = animator.set_text(&self.phrases[index]);
        self.counter = (index + 1) % self.phrases.len();
        self.state = CycleState::Scrambling(completion);
        Some(self.phrases[index].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrambleConfig;

    const FRAME: Duration = Duration::from_millis(16);

    fn setup() -> (PhraseCycle, ScrambleAnimator) {
        let cycle = PhraseCycle::new(&PhraseConfig::default());
        let animator = ScrambleAnimator::new(ScrambleConfig {
            seed: Some(17),
            ..Default::default()
        })
        .unwrap();
        (cycle, animator)
    }

    #[test]
    fn test_stopped_cycle_does_nothing() {
        let (mut cycle, mut animator) = setup();
        assert!(!cycle.is_running());
        assert_eq!(cycle.tick(Instant::now(), &mut animator), None);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_cycles_phrases_in_order_without_overlap() {
        let (mut cycle, mut animator) = setup();
        cycle.start();

        let mut now = Instant::now();
        let mut started: Vec<String> = Vec::new();
        let mut last_start = now;

        for _ in 0..2000 {
            animator.update();
            let was_animating = animator.is_animating();
            if let Some(phrase) = cycle.tick(now, &mut animator) {
                // A new pass only begins once the previous one settled
                assert!(!was_animating);
                if let Some(prev) = started.last() {
                    assert!(now.duration_since(last_start) >= Duration::from_millis(3000));
                    assert_eq!(animator.transitions().iter().filter_map(|t| t.from).collect::<String>(), *prev);
                }
                started.push(phrase.to_string());
                last_start = now;
            }
            now += FRAME;
        }

        assert!(started.len() >= 4);
        assert_eq!(&started[..4], ["TRANSCEND", "EXPLORE", "ORBIT X", "TRANSCEND"]);
    }

    #[test]
    fn test_hold_delay_after_completion() {
        let (mut cycle, mut animator) = setup();
        cycle.start();
        let t0 = Instant::now();
        assert_eq!(cycle.tick(t0, &mut animator), Some("TRANSCEND"));

        while animator.update() {}
        let settled_at = t0 + Duration::from_secs(2);
        assert_eq!(cycle.tick(settled_at, &mut animator), None);
        assert!(!cycle.is_scrambling());

        assert_eq!(cycle.tick(settled_at + Duration::from_millis(2999), &mut animator), None);
        assert_eq!(
            cycle.tick(settled_at + Duration::from_millis(3000), &mut animator),
            Some("EXPLORE")
        );
        assert_eq!(cycle.next_phrase(), Some("ORBIT X"));
    }

    #[test]
    fn test_skip_restarts_immediately() {
        let (mut cycle, mut animator) = setup();
        cycle.start();
        let now = Instant::now();
        assert_eq!(cycle.tick(now, &mut animator), Some("TRANSCEND"));
        assert!(animator.is_animating());

        cycle.skip();
        assert_eq!(cycle.tick(now, &mut animator), Some("EXPLORE"));
        assert!(cycle.is_scrambling());
    }

    #[test]
    fn test_external_cancel_moves_on() {
        let (mut cycle, mut animator) = setup();
        cycle.start();
        let now = Instant::now();
        cycle.tick(now, &mut animator);
        animator.cancel();
        assert_eq!(cycle.tick(now, &mut animator), Some("EXPLORE"));
    }

    #[test]
    fn test_stop_and_restart_keeps_position() {
        let (mut cycle, mut animator) = setup();
        cycle.start();
        let now = Instant::now();
        cycle.tick(now, &mut animator);
        cycle.stop();
        assert!(!cycle.is_running());
        assert_eq!(cycle.tick(now + Duration::from_secs(10), &mut animator), None);

        cycle.start();
        assert_eq!(cycle.tick(now + Duration::from_secs(10), &mut animator), Some("EXPLORE"));
    }
}
