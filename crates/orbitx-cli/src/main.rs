use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use orbitx_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "orbitx")]
#[command(author, version, about = "A terminal landing screen with scrambling titles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (default: ~/.config/orbitx/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the landing screen TUI
    Run,
    /// Print scramble passes to stdout, one line per frame
    Preview {
        /// Texts to scramble to, in order (default: configured phrases)
        texts: Vec<String>,
        /// Text shown before the first pass
        #[arg(long)]
        from: Option<String>,
        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,
        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Start the next pass as soon as the previous one settles
        #[arg(long)]
        no_hold: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Log to a file while the TUI owns the terminal, to stderr otherwise
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config_path),
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
        Commands::Run => {
            let config = AppConfig::load_from(&config_path)?;
            init_logging(&config, true)?;
            commands::run::run(Arc::new(config))
        }
        Commands::Preview {
            texts,
            from,
            fps,
            seed,
            no_hold,
        } => {
            let config = AppConfig::load_from(&config_path)?;
            init_logging(&config, false)?;
            let options = commands::preview::PreviewOptions {
                texts,
                from,
                fps,
                seed,
                hold: !no_hold,
            };
            commands::preview::run(config, options).await
        }
    }
}
