//! mcp-probe - Probe a Kibana management API for MCP endpoints.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the probe configuration (management-URL derivation, API key).
//! - Run the probe campaign and render the report.
//!
//! Does NOT handle:
//! - HTTP probing or response classification (see `crates/client`).
//! - Management-URL derivation logic (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - A missing API key fails fast with a configuration error; there is no
//!   embedded default credential.

mod args;
mod error;
mod report;
mod runner;

use std::time::Duration;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use mcp_probe_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigurationError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // The raw URL is shown in the banner next to the derived management URL.
    let original_url = cli.base_url.clone();

    // Env vars first, then CLI overrides (highest priority).
    let mut loader = match ConfigLoader::new().from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {}", e);
            std::process::exit(ExitCode::ConfigurationError.as_i32());
        }
    };
    if let Some(url) = cli.base_url {
        loader = loader.with_base_url(url);
    }
    if let Some(key) = cli.api_key {
        loader = loader.with_api_key(key);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    let config = match loader.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::ConfigurationError.as_i32());
        }
    };

    let exit_code = match runner::run(&config, original_url.as_deref()).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
