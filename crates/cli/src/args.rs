//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not run the campaign (see `runner` module).
//! - Does not resolve the management URL (see the config crate).

use clap::Parser;

#[derive(Parser)]
#[command(name = "mcp-probe")]
#[command(about = "Probe a Kibana management API for MCP endpoints", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  mcp-probe --api-key $ELASTICSEARCH_API_KEY\n  mcp-probe --base-url https://deployment.es.us-east-1.aws.elastic.cloud --api-key ...\n  RUST_LOG=debug mcp-probe --timeout 10\n\nA data-plane (.es.) base URL is rewritten to its management-plane (.kb.)\ncounterpart before probing.\n"
)]
pub struct Cli {
    /// Base URL of the deployment (data-plane URLs are rewritten to the management console)
    #[arg(short, long, env = "ELASTICSEARCH_URL")]
    pub base_url: Option<String>,

    /// API key tried under each Authorization scheme
    #[arg(short, long, env = "ELASTICSEARCH_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, env = "MCP_PROBE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, env = "MCP_PROBE_SKIP_VERIFY")]
    pub skip_verify: bool,
}
