//! Terminal frontend for derelict text adventures.

mod commands;
mod terminal;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "derelict",
    about = "derelict: play text adventures built from plain-text content packs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure in a content pack
    Play {
        /// Content pack directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Skip the instructions and introduction
        #[arg(long)]
        skip_intro: bool,
    },

    /// Load a content pack and report problems without playing
    Check {
        /// Content pack directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { dir, skip_intro } => commands::play::run(&dir, skip_intro),
        Commands::Check { dir } => commands::check::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr so game text on stdout stays clean. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
