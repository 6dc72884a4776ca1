use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "A responsive terminal carousel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/marquee/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Slide deck TOML file (built-in demo deck when omitted)
        #[arg(short = 's', long)]
        slides: Option<PathBuf>,
    },
    /// Show paging for a viewport width
    Layout {
        /// Viewport width in pixels
        #[arg(short = 'w', long)]
        width: u32,
        /// Number of slides
        #[arg(short = 'n', long, default_value_t = 7)]
        slides: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay carousel events headlessly (prev, next, dot:K, resize:W, tick)
    Simulate {
        /// Initial viewport width in pixels
        #[arg(short = 'w', long)]
        width: u32,
        /// Number of slides
        #[arg(short = 'n', long, default_value_t = 7)]
        slides: usize,
        /// Events to replay in order
        events: Vec<String>,
    },
    /// Print the effective configuration
    Config {
        /// Also write it to the config file (the --config path if given)
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let config = Arc::new(config);

    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run { slides }) => commands::run::run(config, slides).await,
        None => commands::run::run(config, None).await,
        Some(Commands::Layout { width, slides, json }) => {
            commands::layout::run(&config, width, slides, json)
        }
        Some(Commands::Simulate { width, slides, events }) => {
            commands::simulate::run(&config, width, slides, &events)
        }
        Some(Commands::Config { write }) => {
            commands::config::run(&config, write, cli.config.as_deref())
        }
    }
}

/// Initialize logging; the TUI logs to a file so the screen stays intact
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

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
                    .with_writer(std::sync::Mutex::new(file)),
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
