//! CLI frontend for the Tilemotion tile animation engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tm",
    about = "Tilemotion: time-driven tile animation for Tiled maps",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register every animated tile and report problems
    Check {
        /// Tiled JSON map file
        map: PathBuf,

        /// Animated layer name (default: first tile layer)
        #[arg(short, long)]
        layer: Option<String>,
    },

    /// Drive the animations on a virtual clock
    Simulate {
        /// Tiled JSON map file
        map: PathBuf,

        /// Animated layer name (default: first tile layer)
        #[arg(short, long)]
        layer: Option<String>,

        /// Virtual time to simulate, in milliseconds
        #[arg(short, long, default_value = "5000")]
        duration: u64,

        /// Driver period, in milliseconds
        #[arg(short, long, default_value = "20")]
        period: u64,

        /// Show every tick that changed a frame
        #[arg(short, long)]
        verbose: bool,
    },

    /// Tick once at a given time and print the animated layer
    Sample {
        /// Tiled JSON map file
        map: PathBuf,

        /// Time to sample, in milliseconds
        #[arg(short, long)]
        at: u64,

        /// Animated layer name (default: first tile layer)
        #[arg(short, long)]
        layer: Option<String>,
    },
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Check { map, layer } => commands::check::run(&map, layer.as_deref()),
        Commands::Simulate {
            map,
            layer,
            duration,
            period,
            verbose,
        } => commands::simulate::run(&map, layer.as_deref(), duration, period, verbose),
        Commands::Sample { map, at, layer } => commands::sample::run(&map, layer.as_deref(), at),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
