//! `fridge` — run fridge scripts from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fridge_cli::Session;
use fridge_events::TracingNotifier;
use fridge_inventory::config::{CAPACITY_ENV, FRESHNESS_THRESHOLD_ENV};
use fridge_inventory::{Fridge, FridgeConfig};

const DEMO_SCRIPT: &str = include_str!("../scripts/demo.fridge");

#[derive(Parser)]
#[command(name = "fridge")]
#[command(about = "Perishables-aware fridge inventory harness")]
#[command(version)]
struct Cli {
    /// Maximum number of units the fridge holds
    #[arg(long, env = CAPACITY_ENV, default_value_t = FridgeConfig::default().capacity)]
    capacity: usize,

    /// Freshness at or below which perishable units count as spoiled
    #[arg(long, env = FRESHNESS_THRESHOLD_ENV, default_value_t = FridgeConfig::default().freshness_threshold, allow_negative_numbers = true)]
    threshold: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a fridge script (`-` reads from stdin)
    Run {
        script: PathBuf,
    },

    /// Run the built-in reference session
    Demo,
}

fn main() -> Result<()> {
    fridge_observability::init();

    let cli = Cli::parse();
    let config = FridgeConfig::default()
        .with_capacity(cli.capacity)
        .with_freshness_threshold(cli.threshold);
    tracing::info!(capacity = config.capacity, threshold = config.freshness_threshold, "fridge ready");

    let source = match &cli.command {
        Commands::Run { script } if script.as_os_str() == "-" => {
            std::io::read_to_string(std::io::stdin()).context("failed to read script from stdin")?
        }
        Commands::Run { script } => std::fs::read_to_string(script)
            .with_context(|| format!("failed to read script {}", script.display()))?,
        Commands::Demo => DEMO_SCRIPT.to_string(),
    };

    let fridge = Fridge::new(config, TracingNotifier::new());
    let mut session = Session::new(fridge, std::io::stdout().lock());
    session.run_script(&source)
}
