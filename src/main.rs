//! Mosaic - terminal editor for composing nested tile mosaics
//!
//! Paint small Tile grids from a color palette, then drop them into the
//! cells of a large Canvas grid and rotate them into patterns.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosaic::config::Config;
use mosaic::constants::{APP_BINARY_NAME, APP_NAME};
use mosaic::controller::InteractionController;
use mosaic::tui;

/// Mosaic - terminal editor for composing nested tile mosaics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use this config file instead of the platform default
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the default Tile density for this session
    #[arg(short, long, value_name = "N")]
    tile_density: Option<u8>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(short, long)]
    init: bool,

    /// Print the startup editor state as JSON and exit
    #[arg(long)]
    dump_state: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    if cli.init {
        let config = Config::default();
        let path = match cli.config {
            Some(path) => {
                config.save_to(&path)?;
                path
            }
            None => config.save()?,
        };
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(density) = cli.tile_density {
        config.grid.tile_density = density;
    }
    config.validate().with_context(|| {
        format!("Invalid configuration (run `{APP_BINARY_NAME} --init` to write defaults)")
    })?;

    if cli.dump_state {
        let controller = InteractionController::new(&config);
        let json = serde_json::to_string_pretty(&controller)
            .context("Failed to serialize editor state")?;
        println!("{json}");
        return Ok(());
    }

    info!("Starting {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting errors
    tui::restore_terminal(terminal)?;

    result
}

/// Sends tracing output to `path` so the alternate screen stays clean.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
