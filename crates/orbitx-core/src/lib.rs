pub mod config;
pub mod error;
pub mod scramble;
pub mod cycle;
pub mod telemetry;
pub mod session;

pub use config::{AppConfig, PhraseConfig, ScrambleConfig, TelemetryConfig};
pub use error::{Error, Result};
pub use scramble::{Completion, ScrambleAnimator, ScrambleFrame, ScrambleOutcome};
pub use session::{LandingSession, SessionTick};
