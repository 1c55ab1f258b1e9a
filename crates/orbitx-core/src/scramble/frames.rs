//! Host refresh sources and the explicit frame loop

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::{Interval, MissedTickBehavior};

use super::animator::ScrambleAnimator;
use super::completion::ScrambleOutcome;
use super::frame::ScrambleFrame;
use crate::config::ScrambleConfig;

/// Something that wakes once per display refresh
#[async_trait]
pub trait FrameSource: Send {
    /// Wait until the next frame should be rendered
    async fn next_frame(&mut self);
}

/// Fixed-rate frames backed by a tokio interval
pub struct IntervalFrames {
    interval: Interval,
}

impl IntervalFrames {
    /// Must be called from within a tokio runtime. Periods under 1ms are
    /// rounded up to 1ms.
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
        // A slow consumer drops frames instead of bursting to catch up
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn from_config(config: &ScrambleConfig) -> Self {
        Self::new(config.frame_duration())
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl FrameSource for IntervalFrames {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

/// Play one pass to `text`, calling `on_frame` for every rendered frame.
///
/// Frame 0 is rendered immediately; later frames wait on `frames`.
pub async fn play<R, F, C>(
    animator: &mut ScrambleAnimator<R>,
    text: &str,
    frames: &mut F,
    mut on_frame: C,
) -> ScrambleOutcome
where
    R: Rng,
    F: FrameSource + ?Sized,
    C: FnMut(&ScrambleFrame),
{
    let mut completion = animator.set_text(text);
    on_frame(animator.frame());

    loop {
        if let Some(outcome) = completion.try_outcome() {
            return outcome;
        }
        frames.next_frame().await;
        if animator.update() {
            on_frame(animator.frame());
        }
    }
}
