//! Centralized constants for the mcp-probe workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Management-URL Derivation
// =============================================================================

/// Substring marking an Elastic Cloud data-plane (Elasticsearch) hostname.
pub const DATA_PLANE_MARKER: &str = ".es.";

/// Substring marking an Elastic Cloud management-plane (Kibana) hostname.
pub const MANAGEMENT_PLANE_MARKER: &str = ".kb.";

/// Fallback management console URL used when no base URL is supplied.
pub const DEFAULT_MANAGEMENT_URL: &str =
    "https://ai-assistants-ffcafb.kb.us-east-1.aws.elastic.cloud";
