use std::io::{self, Write};

use anyhow::Result;

use orbitx_core::scramble::{play, IntervalFrames, ScrambleAnimator, ScrambleOutcome};
use orbitx_core::AppConfig;

pub struct PreviewOptions {
    pub texts: Vec<String>,
    pub from: Option<String>,
    pub fps: Option<u32>,
    pub seed: Option<u64>,
    /// Wait `phrases.hold_ms` between passes
    pub hold: bool,
}

pub async fn run(mut config: AppConfig, options: PreviewOptions) -> Result<()> {
    if let Some(fps) = options.fps {
        config.scramble.animation_fps = fps;
    }
    if options.seed.is_some() {
        config.scramble.seed = options.seed;
    }
    config.validate()?;

    let texts = if options.texts.is_empty() {
        config.phrases.items.clone()
    } else {
        options.texts
    };

    let mut animator = ScrambleAnimator::new(config.scramble.clone())?;
    if let Some(from) = &options.from {
        animator.set_display(from);
    }
    let mut frames = IntervalFrames::from_config(&config.scramble);
    let mut stdout = io::stdout();

    for (i, text) in texts.iter().enumerate() {
        if i > 0 && options.hold {
            tokio::time::sleep(config.phrases.hold()).await;
        }

        let mut rendered = 0u32;
        let mut write_result = Ok(());
        let outcome = play(&mut animator, text, &mut frames, |frame| {
            rendered += 1;
            if write_result.is_ok() {
                write_result = writeln!(stdout, "{}", frame);
            }
        })
        .await;
        write_result?;

        tracing::info!(text = text.as_str(), frames = rendered, ?outcome, "Pass finished");
        if outcome != ScrambleOutcome::Completed {
            anyhow::bail!("Pass to {:?} did not complete", text);
        }
        writeln!(stdout)?;
    }

    stdout.flush()?;
    Ok(())
}
