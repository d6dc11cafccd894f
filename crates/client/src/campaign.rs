//! Probe campaign phase tables.
//!
//! The candidate paths are declarative data, not logic: ordered sequences of
//! string constants, grouped into named phases. Keeping them as literal
//! tables makes the battery auditable and easy to extend.
//!
//! Iteration order matters only for report ordering. Duplicate entries are
//! kept as-is; the probe is idempotent, so a repeated path just produces a
//! repeated report block.

use reqwest::Method;
use serde_json::json;

/// One named group of path probes sharing an HTTP method and an optional body.
#[derive(Debug, Clone)]
pub struct ProbePhase {
    pub name: &'static str,
    pub method: Method,
    pub paths: &'static [&'static str],
    pub body: Option<serde_json::Value>,
}

/// MCP protocol endpoints under the naming variants Kibana might mount them
/// at: `/api/mcp`, `/internal/mcp`, and the spelled-out protocol name with
/// hyphens and underscores.
pub const PROTOCOL_DISCOVERY_PATHS: &[&str] = &[
    // MCP protocol endpoints
    "/api/mcp",
    "/api/mcp/servers",
    "/api/mcp/tools",
    "/api/mcp/resources",
    "/api/mcp/notifications",
    // MCP server management
    "/api/mcp/servers/list",
    "/api/mcp/servers/status",
    "/api/mcp/servers/health",
    "/api/mcp/servers/connect",
    "/api/mcp/servers/disconnect",
    // MCP tools and resources
    "/api/mcp/tools/list",
    "/api/mcp/tools/call",
    "/api/mcp/resources/list",
    "/api/mcp/resources/read",
    // MCP notifications
    "/api/mcp/notifications/list",
    "/api/mcp/notifications/send",
    // Alternative MCP paths
    "/internal/mcp",
    "/internal/mcp/servers",
    "/internal/mcp/tools",
    "/internal/mcp/resources",
    // MCP with different naming
    "/api/model-context-protocol",
    "/api/model-context-protocol/servers",
    "/api/model-context-protocol/tools",
    "/api/model-context-protocol/resources",
    // MCP with underscores
    "/api/model_context_protocol",
    "/api/model_context_protocol/servers",
    "/api/model_context_protocol/tools",
    "/api/model_context_protocol/resources",
    // MCP with hyphens
    "/api/model-context-protocol",
    "/api/model-context-protocol/servers",
    "/api/model-context-protocol/tools",
    "/api/model-context-protocol/resources",
];

/// Write-style operations, sent as POST with a fixed test body.
pub const WRITE_DISCOVERY_PATHS: &[&str] = &[
    "/api/mcp/servers/register",
    "/api/mcp/servers/unregister",
    "/api/mcp/tools/call",
    "/api/mcp/resources/read",
    "/api/mcp/notifications/send",
    "/internal/mcp/servers/register",
    "/internal/mcp/tools/call",
    "/internal/mcp/resources/read",
];

/// MCP roots under alternative console mount points.
pub const ALTERNATIVE_MOUNT_PATHS: &[&str] = &[
    "/app/elasticsearch/api/mcp",
    "/kibana/api/mcp",
    "/elastic/api/mcp",
    "/app/elasticsearch/api/model-context-protocol",
    "/kibana/api/model-context-protocol",
    "/elastic/api/model-context-protocol",
];

/// Feature-flag registrations that would indicate MCP support.
pub const FEATURE_FLAG_PATHS: &[&str] = &[
    "/api/features/mcp",
    "/api/features/model-context-protocol",
    "/api/features/model_context_protocol",
    "/api/features/model-context-protocol",
    "/internal/features/mcp",
    "/internal/features/model-context-protocol",
];

/// Status and health endpoints for an MCP subsystem.
pub const STATUS_PATHS: &[&str] = &[
    "/api/mcp/status",
    "/api/mcp/health",
    "/api/mcp/info",
    "/api/model-context-protocol/status",
    "/api/model-context-protocol/health",
    "/api/model-context-protocol/info",
    "/internal/mcp/status",
    "/internal/mcp/health",
    "/internal/mcp/info",
];

/// Capability/discovery endpoints for an MCP subsystem.
pub const CAPABILITY_PATHS: &[&str] = &[
    "/api/mcp/discover",
    "/api/mcp/discovery",
    "/api/mcp/capabilities",
    "/api/model-context-protocol/discover",
    "/api/model-context-protocol/discovery",
    "/api/model-context-protocol/capabilities",
    "/internal/mcp/discover",
    "/internal/mcp/discovery",
    "/internal/mcp/capabilities",
];

/// The fixed JSON body sent with every write-operation probe.
pub fn write_probe_body() -> serde_json::Value {
    json!({
        "server_name": "test-mcp-server",
        "tool_name": "test-tool",
        "parameters": { "test": "value" }
    })
}

/// The full campaign, in execution order.
///
/// Each phase is independent; later phases run regardless of earlier results.
pub fn campaign_phases() -> Vec<ProbePhase> {
    vec![
        ProbePhase {
            name: "Protocol endpoint discovery",
            method: Method::GET,
            paths: PROTOCOL_DISCOVERY_PATHS,
            body: None,
        },
        ProbePhase {
            name: "Write operation discovery",
            method: Method::POST,
            paths: WRITE_DISCOVERY_PATHS,
            body: Some(write_probe_body()),
        },
        ProbePhase {
            name: "Alternative mount point discovery",
            method: Method::GET,
            paths: ALTERNATIVE_MOUNT_PATHS,
            body: None,
        },
        ProbePhase {
            name: "Feature flag discovery",
            method: Method::GET,
            paths: FEATURE_FLAG_PATHS,
            body: None,
        },
        ProbePhase {
            name: "Status endpoint discovery",
            method: Method::GET,
            paths: STATUS_PATHS,
            body: None,
        },
        ProbePhase {
            name: "Capability discovery",
            method: Method::GET,
            paths: CAPABILITY_PATHS,
            body: None,
        },
    ]
}
