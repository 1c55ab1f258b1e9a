//! Text scramble animation
//!
//! A pass reveals a new string over an old one character by character. Every
//! position waits a random number of frames, shows random glyphs for a random
//! number of frames, then settles on its target character.
//!
//! ## Pieces
//! - `transition` - per-character state and the glyph alphabet
//! - `frame` - the rendered output of one frame
//! - `completion` - future resolved when a pass settles or is cancelled
//! - `animator` - owns the active pass and advances it one frame at a time
//! - `frames` - host refresh sources and the `play` loop
//!
//! # Usage
//!
//! ```ignore
//! use orbitx_core::scramble::{ScrambleAnimator, ScrambleOutcome};
//!
//! let mut animator = ScrambleAnimator::new(config.scramble.clone())?;
//! let mut done = animator.set_text("ORBIT X");
//!
//! // In the draw loop, once per refresh
//! animator.update();
//! if done.try_outcome() == Some(ScrambleOutcome::Completed) {
//!     // settled
//! }
//! ```

pub mod transition;
pub mod frame;
pub mod completion;
pub mod animator;
pub mod frames;

pub use animator::ScrambleAnimator;
pub use completion::{Completion, ScrambleOutcome};
pub use frame::{FrameCell, ScrambleFrame};
pub use frames::{play, FrameSource, IntervalFrames};
pub use transition::{CharacterTransition, GlyphSet, TransitionState};
