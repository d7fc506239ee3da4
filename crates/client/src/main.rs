//! Character roster client binary.
//!
//! Main entry point for the roster.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (`.env` is loaded first)
//! 2. File logging
//! 3. Roster and battle RNG via RosterBuilder
//! 4. The text menu on stdin/stdout
//!
//! # Examples
//!
//! ```bash
//! # Reproducible battles, empty roster
//! ROSTER_RNG_SEED=7 ROSTER_SEED_STARTERS=false cargo run -p roster-client
//! ```

use std::io;

use anyhow::Result;
use client_frontend_cli::{CliApp, CliConfig, logging};
use roster_runtime::{Roster, RuntimeConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting roster client");
    tracing::info!("Seed starters: {}", runtime_config.seed_starters);
    tracing::info!("RNG seed: {:?}", runtime_config.rng_seed);

    // 3. Build the roster
    let setup = Roster::builder().config(runtime_config).build()?;
    tracing::info!(characters = setup.roster.len()?, "Roster built");

    // 4. Run the menu
    let mut app = CliApp::new(setup.roster, setup.rng, &cli_config);
    app.run(io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
