//! Campaign orchestration.
//!
//! Responsibilities:
//! - Build the probe client from configuration.
//! - Iterate the campaign phases strictly sequentially, one request at a
//!   time, rendering each result as it completes.
//!
//! Does NOT handle:
//! - Configuration loading (see `main` and the config crate).
//! - Response classification (see the client crate).
//!
//! Invariants:
//! - The banner is printed before any network activity.
//! - Later phases run regardless of earlier results; a path that fails every
//!   scheme does not stop the campaign.

use anyhow::{Context, Result};
use tracing::info;

use mcp_probe_client::ProbeClient;
use mcp_probe_client::campaign::campaign_phases;
use mcp_probe_config::Config;

use crate::report;

/// Run the full probe campaign against the configured console.
pub async fn run(config: &Config, original_url: Option<&str>) -> Result<()> {
    print!(
        "{}",
        report::render_banner(original_url, &config.connection.base_url, true)
    );

    let client = ProbeClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build probe client")?;

    info!("Probing {}", client.base_url());

    for phase in campaign_phases() {
        println!("{}", report::render_phase_header(&phase));
        for path in phase.paths {
            let probe = client
                .probe_path(path, phase.method.clone(), phase.body.as_ref())
                .await;
            print!("{}", report::render_path_probe(&probe));
        }
        println!();
    }

    print!("{}", report::summary());
    Ok(())
}
