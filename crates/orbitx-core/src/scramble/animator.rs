//! Scramble animator: owns the display buffer and at most one active pass

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::completion::{channel, Completion, Resolver, ScrambleOutcome};
use super::frame::{FrameCell, ScrambleFrame};
use super::transition::{CharacterTransition, GlyphSet, TransitionState};
use crate::config::ScrambleConfig;

/// Pass currently being animated
struct ActiveTask {
    id: u64,
    queue: Vec<CharacterTransition>,
    resolver: Resolver,
}

/// Scramble animation controller
///
/// Call `set_text()` to start a pass, then `update()` once per display
/// refresh until the returned [`Completion`] resolves. Starting a new pass
/// cancels the previous one.
pub struct ScrambleAnimator<R = StdRng> {
    config: ScrambleConfig,
    glyphs: GlyphSet,
    rng: R,
    /// What is on screen right now
    frame: ScrambleFrame,
    task: Option<ActiveTask>,
    /// Frame number the next `update()` renders
    frame_index: u32,
    next_task_id: u64,
}

impl ScrambleAnimator<StdRng> {
    /// Create an animator seeded from `config.seed`, or from OS entropy
    pub fn new(config: ScrambleConfig) -> crate::Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> ScrambleAnimator<R> {
    /// Create an animator drawing randomness from `rng`
    pub fn with_rng(config: ScrambleConfig, rng: R) -> crate::Result<Self> {
        config.validate()?;
        let glyphs = GlyphSet::new(&config.glyphs)
            .ok_or_else(|| crate::Error::Config("scramble.glyphs must not be empty".into()))?;

        Ok(Self {
            config,
            glyphs,
            rng,
            frame: ScrambleFrame::default(),
            task: None,
            frame_index: 0,
            next_task_id: 0,
        })
    }

    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    /// Current display buffer
    #[inline]
    pub fn frame(&self) -> &ScrambleFrame {
        &self.frame
    }

    /// Current display text, scramble glyphs included
    pub fn text(&self) -> String {
        self.frame.text()
    }

    /// Frame number the next `update()` will render
    #[inline]
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.task.is_some()
    }

    /// Transitions of the active pass (empty when idle)
    pub fn transitions(&self) -> &[CharacterTransition] {
        self.task.as_ref().map(|t| t.queue.as_slice()).unwrap_or(&[])
    }

    /// Replace the display immediately, cancelling any active pass
    pub fn set_display(&mut self, text: &str) {
        self.cancel();
        self.frame = ScrambleFrame::plain(text);
    }

    /// Start a pass from the displayed text to `new_text`.
    ///
    /// Frame 0 is rendered before this returns. The returned completion
    /// resolves `Completed` once every character has settled, or
    /// `Cancelled` if another pass starts first.
    pub fn set_text(&mut self, new_text: &str) -> Completion {
        let old: Vec<char> = self.frame.chars().collect();
        let new: Vec<char> = new_text.chars().collect();
        let length = old.len().max(new.len());

        let queue: Vec<CharacterTransition> = (0..length)
            .map(|i| {
                CharacterTransition::random(
                    old.get(i).copied(),
                    new.get(i).copied(),
                    self.config.max_start_frames,
                    self.config.max_scramble_frames,
                    &mut self.rng,
                )
            })
            .collect();

        self.cancel();

        let (resolver, completion) = channel();
        let id = self.next_task_id;
        self.next_task_id += 1;
        tracing::debug!(pass = id, length, text = new_text, "Scramble pass started");

        self.task = Some(ActiveTask { id, queue, resolver });
        self.frame_index = 0;
        self.update();

        completion
    }

    /// Advance the active pass by one frame.
    ///
    /// Returns `false` without touching the display when no pass is active.
    pub fn update(&mut self) -> bool {
        let Some(task) = self.task.as_mut() else {
            return false;
        };

        let frame = self.frame_index;
        let mut cells = Vec::with_capacity(task.queue.len());
        let mut complete = 0;

        for transition in task.queue.iter_mut() {
            match transition.state_at(frame) {
                TransitionState::Settled => {
                    complete += 1;
                    if let Some(c) = transition.to {
                        cells.push(FrameCell::settled(c));
                    }
                }
                TransitionState::Scrambling => {
                    let glyph = match transition.glyph {
                        Some(glyph) if !self.rng.gen_bool(self.config.reroll_probability) => glyph,
                        _ => self.glyphs.pick(&mut self.rng),
                    };
                    transition.glyph = Some(glyph);
                    cells.push(FrameCell::scrambling(glyph));
                }
                TransitionState::Pending => {
                    if let Some(c) = transition.from {
                        cells.push(FrameCell::settled(c));
                    }
                }
            }
        }

        self.frame = ScrambleFrame::from(cells);

        if complete == task.queue.len() {
            if let Some(task) = self.task.take() {
                tracing::debug!(pass = task.id, frames = frame + 1, "Scramble pass completed");
                task.resolver.resolve(ScrambleOutcome::Completed);
            }
        } else {
            self.frame_index += 1;
        }

        true
    }

    /// Stop the active pass where it is; its completion resolves `Cancelled`
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::debug!(pass = task.id, frame = self.frame_index, "Scramble pass cancelled");
            task.resolver.resolve(ScrambleOutcome::Cancelled);
        }
    }
}
