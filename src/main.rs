//! circuit-guard
//!
//! Calls a remote endpoint on a fixed cadence through a circuit breaker.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                        CIRCUIT GUARD                         │
//!   │                                                              │
//!   │  ┌────────────┐   tick   ┌──────────────┐  admitted ┌──────┐ │
//!   │  │ supervisor │─────────▶│   breaker    │──────────▶│probe │─┼──▶ Endpoint
//!   │  │  (ticker)  │          │closed/open/  │           └──────┘ │
//!   │  └────────────┘          │  half-open   │  open or           │
//!   │        ▲                 └──────────────┘  failed  ┌────────┐│
//!   │        │                        └─────────────────▶│fallback││
//!   │   shutdown                                         └────────┘│
//!   │   (signals)           config · logging                       │
//!   └──────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use circuit_guard::config::{load_config, GuardConfig};
use circuit_guard::lifecycle::{wait_for_signal, Shutdown};
use circuit_guard::observability::init_logging;
use circuit_guard::Supervisor;

#[derive(Parser)]
#[command(name = "circuit-guard")]
#[command(about = "Call an endpoint through a circuit breaker", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the target URL from the configuration.
    #[arg(short, long)]
    target: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GuardConfig::default(),
    };
    if let Some(target) = cli.target {
        config.target.url = target;
    }

    init_logging(&config.observability)?;

    match &cli.config {
        Some(path) => tracing::info!(path = %path.display(), "Configuration loaded"),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    tracing::info!(
        failure_threshold = config.breaker.failure_threshold,
        success_threshold = config.breaker.success_threshold,
        open_timeout_ms = config.breaker.open_timeout_ms,
        target_url = %config.target.url,
        "circuit-guard v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    // Validates the final config, including any --target override.
    let supervisor = Supervisor::new(&config)?;
    let shutdown = Shutdown::new();
    let handle = tokio::spawn(supervisor.run(shutdown.subscribe()));

    wait_for_signal().await?;
    shutdown.trigger();
    handle.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
