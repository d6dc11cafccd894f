//! Report rendering for the probe campaign.
//!
//! Responsibilities:
//! - Render the configuration banner, phase headers, per-path attempt lines,
//!   found-endpoint markers, and the closing summary as plain text.
//! - Mask the API key: the banner only ever says whether a key is set.
//!
//! Does NOT handle:
//! - Issuing requests or classifying responses (see the client crate).
//! - Writing to stdout (the runner prints what this module renders).
//!
//! Invariants:
//! - Every attempt line includes the raw status; classified statuses add a
//!   short annotation, unclassified ones (e.g. 429, 500) stay bare.
//! - The closing summary is a fixed block of text, not computed from results.

use std::fmt::Write;

use mcp_probe_client::{AttemptOutcome, Classification, PathProbe, ProbePhase};

/// Render the configuration banner printed before any network activity.
pub fn render_banner(original_url: Option<&str>, management_url: &str, api_key_set: bool) -> String {
    let mut out = String::new();
    out.push_str("MCP endpoint discovery configuration:\n");
    let _ = writeln!(out, "  Original URL:   {}", original_url.unwrap_or("not set"));
    let _ = writeln!(out, "  Management URL: {}", management_url);
    let _ = writeln!(
        out,
        "  API key:        {}",
        if api_key_set { "set" } else { "missing" }
    );
    out.push('\n');
    out
}

/// Render the header line introducing one campaign phase.
pub fn render_phase_header(phase: &ProbePhase) -> String {
    format!(
        "=== {} ({}, {} paths) ===",
        phase.name,
        phase.method,
        phase.paths.len()
    )
}

/// Render one attempt line (two-space indent under the path line).
fn render_attempt(label: &str, outcome: &AttemptOutcome) -> String {
    match outcome {
        AttemptOutcome::Http { status, detail } => match Classification::of(*status) {
            Classification::Success => {
                let mut line = format!("  {}: {} (success)\n", label, status);
                let _ = writeln!(
                    line,
                    "    response: {}",
                    detail.as_deref().unwrap_or_default()
                );
                line
            }
            Classification::AuthRequired => format!("  {}: {} (auth required)\n", label, status),
            Classification::Forbidden => format!("  {}: {} (forbidden)\n", label, status),
            Classification::BadRequest => format!(
                "  {}: {} (bad request): {}\n",
                label,
                status,
                detail.as_deref().unwrap_or_default()
            ),
            Classification::NotFound => format!("  {}: {} (not found)\n", label, status),
            Classification::Unclassified => format!("  {}: {}\n", label, status),
        },
        AttemptOutcome::Transport { message } => {
            format!("  {}: request failed: {}\n", label, message)
        }
    }
}

/// Render one path probe: the testing line, each attempt, and the
/// found-endpoint marker when a scheme succeeded.
pub fn render_path_probe(probe: &PathProbe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nTesting: {} {}", probe.method, probe.path);
    for attempt in &probe.attempts {
        out.push_str(&render_attempt(attempt.scheme.label(), &attempt.outcome));
    }
    if let Some(found) = &probe.found {
        let _ = writeln!(
            out,
            "Found working endpoint: {} {} ({})",
            probe.method,
            probe.path,
            found.scheme.label()
        );
    }
    out
}

/// The fixed closing summary.
///
/// Pre-written text describing what the battery covers and the expected
/// conclusion for hosted deployments; deliberately not derived from the
/// actual results.
pub fn summary() -> &'static str {
    r#"
============================================================
MCP endpoint discovery summary
============================================================
What was tested:
  - MCP protocol endpoints (/api/mcp/*)
  - Model Context Protocol endpoints (/api/model-context-protocol/*)
  - MCP server management endpoints
  - MCP tools and resources endpoints
  - MCP notification endpoints
  - Alternative mount points, feature flags, status and capability paths

Findings:
  - Hosted consoles answer 404 for the MCP paths above
  - MCP functionality is typically implemented by external servers,
    not built into the console

Conclusion:
  - The deployment provides the data, not the MCP protocol
  - Run a standalone MCP server that connects to this deployment and
    point MCP clients at it
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_probe_client::campaign::campaign_phases;
    use mcp_probe_client::{AuthAttempt, AuthScheme, FoundEndpoint};
    use reqwest::Method;

    fn http_attempt(scheme: AuthScheme, status: u16, detail: Option<&str>) -> AuthAttempt {
        AuthAttempt {
            scheme,
            outcome: AttemptOutcome::Http {
                status,
                detail: detail.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_banner_masks_api_key() {
        let banner = render_banner(
            Some("https://deployment.es.us-east-1.aws.elastic.cloud"),
            "https://deployment.kb.us-east-1.aws.elastic.cloud",
            true,
        );
        assert!(banner.contains("Original URL:   https://deployment.es.us-east-1.aws.elastic.cloud"));
        assert!(banner.contains("Management URL: https://deployment.kb.us-east-1.aws.elastic.cloud"));
        assert!(banner.contains("API key:        set"));
    }

    #[test]
    fn test_banner_without_original_url() {
        let banner = render_banner(None, "https://deployment.kb.example.cloud", false);
        assert!(banner.contains("Original URL:   not set"));
        assert!(banner.contains("API key:        missing"));
    }

    #[test]
    fn test_phase_header() {
        let phases = campaign_phases();
        let header = render_phase_header(&phases[1]);
        assert_eq!(header, "=== Write operation discovery (POST, 8 paths) ===");
    }

    #[test]
    fn test_render_not_found_attempts() {
        let probe = PathProbe {
            path: "/api/mcp".to_string(),
            method: Method::GET,
            attempts: vec![
                http_attempt(AuthScheme::ApiKey, 404, None),
                http_attempt(AuthScheme::Bearer, 404, None),
                http_attempt(AuthScheme::Basic, 404, None),
                http_attempt(AuthScheme::Anonymous, 404, None),
            ],
            found: None,
        };

        let rendered = render_path_probe(&probe);
        assert!(rendered.contains("Testing: GET /api/mcp"));
        assert_eq!(rendered.matches("404 (not found)").count(), 4);
        assert!(!rendered.contains("Found working endpoint"));
    }

    #[test]
    fn test_render_success_includes_marker_and_snippet() {
        let probe = PathProbe {
            path: "/api/mcp/tools/list".to_string(),
            method: Method::GET,
            attempts: vec![
                http_attempt(AuthScheme::ApiKey, 401, None),
                http_attempt(AuthScheme::Bearer, 200, Some(r#"{"tools":[]}"#)),
            ],
            found: Some(FoundEndpoint {
                scheme: AuthScheme::Bearer,
                body_snippet: r#"{"tools":[]}"#.to_string(),
            }),
        };

        let rendered = render_path_probe(&probe);
        assert!(rendered.contains("ApiKey: 401 (auth required)"));
        assert!(rendered.contains("Bearer: 200 (success)"));
        assert!(rendered.contains(r#"response: {"tools":[]}"#));
        assert!(
            rendered.contains("Found working endpoint: GET /api/mcp/tools/list (Bearer)")
        );
    }

    #[test]
    fn test_render_bad_request_carries_detail() {
        let line = render_attempt(
            "ApiKey",
            &AttemptOutcome::Http {
                status: 400,
                detail: Some(r#"{"error":"missing parameter"}"#.to_string()),
            },
        );
        assert_eq!(
            line,
            "  ApiKey: 400 (bad request): {\"error\":\"missing parameter\"}\n"
        );
    }

    #[test]
    fn test_render_unclassified_status_stays_bare() {
        let line = render_attempt(
            "Basic",
            &AttemptOutcome::Http {
                status: 503,
                detail: None,
            },
        );
        assert_eq!(line, "  Basic: 503\n");
    }

    #[test]
    fn test_render_transport_error() {
        let line = render_attempt(
            "No Auth",
            &AttemptOutcome::Transport {
                message: "connection refused".to_string(),
            },
        );
        assert_eq!(line, "  No Auth: request failed: connection refused\n");
    }

    #[test]
    fn test_summary_is_static() {
        let text = summary();
        assert!(text.contains("MCP endpoint discovery summary"));
        assert!(text.contains("Conclusion:"));
    }
}
