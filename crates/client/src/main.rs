//! Elemental arena client binary.
//!
//! # Examples
//!
//! ```bash
//! # Single battle with a turn-by-turn log
//! cargo run -p arena-client -- battle Ignis:fire Frost:ice
//!
//! # Interactive trainer/battle menu, debug log written to ./logs/arena.log
//! ARENA_LOG_DIR=./logs RUST_LOG=debug cargo run -p arena-client -- play
//! ```

use anyhow::Result;
use arena_client::commands::{Battle, Play, Presets};
use arena_client::{CliConfig, logging};
use clap::Parser;

/// Turn-based elemental creature battles
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Turn-based elemental creature battles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a single battle between two creatures
    Battle(Battle),

    /// Show starting stats per element
    Presets(Presets),

    /// Interactive trainer and battle menu
    Play(Play),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    if !config.color {
        console::set_colors_enabled(false);
    }

    // Keep the guard alive so the log file is flushed on exit
    let _guard = logging::setup_logging(&config)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Battle(cmd) => cmd.execute(&config),
        Command::Presets(cmd) => cmd.execute(),
        Command::Play(cmd) => cmd.execute(&config),
    }
}
