//! Integration tests running the full campaign against a mocked console.

mod common;

use common::{TEST_KEY, UNREACHABLE_URL, probe_client};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mcp_probe_client::campaign::campaign_phases;
use mcp_probe_client::{AttemptOutcome, AuthScheme, PathProbe};

/// Total number of path probes across all campaign phases.
fn total_campaign_paths() -> usize {
    campaign_phases().iter().map(|p| p.paths.len()).sum()
}

/// Run every phase sequentially, returning one probe result per path.
async fn run_campaign(uri: &str) -> Vec<PathProbe> {
    let client = probe_client(uri);
    let mut results = Vec::new();
    for phase in campaign_phases() {
        for probe_path in phase.paths {
            let probe = client
                .probe_path(probe_path, phase.method.clone(), phase.body.as_ref())
                .await;
            results.push(probe);
        }
    }
    results
}

#[tokio::test]
async fn test_campaign_reports_single_found_endpoint() {
    let mock_server = MockServer::start().await;

    // Exactly one endpoint exists, and only under the Bearer presentation.
    Mock::given(method("GET"))
        .and(path("/api/mcp/tools/list"))
        .and(header("Authorization", format!("Bearer {}", TEST_KEY)))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"tools":[]}"#))
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let results = run_campaign(&mock_server.uri()).await;
    assert_eq!(results.len(), total_campaign_paths());

    let found: Vec<_> = results.iter().filter(|p| p.found.is_some()).collect();
    assert_eq!(found.len(), 1, "exactly one endpoint must be found");
    assert_eq!(found[0].path, "/api/mcp/tools/list");
    assert_eq!(
        found[0].found.as_ref().unwrap().scheme,
        AuthScheme::Bearer
    );

    // Every other path exhausted all four schemes with a 404 each.
    for probe in results.iter().filter(|p| p.found.is_none()) {
        assert_eq!(probe.attempts.len(), 4, "path {}", probe.path);
        for attempt in &probe.attempts {
            assert!(
                matches!(attempt.outcome, AttemptOutcome::Http { status: 404, .. }),
                "path {} scheme {:?}",
                probe.path,
                attempt.scheme
            );
        }
    }
}

#[tokio::test]
async fn test_campaign_completes_when_host_unreachable() {
    let results = run_campaign(UNREACHABLE_URL).await;

    // Every phase ran to completion: one result per path, one transport
    // error per (path, scheme) pair.
    assert_eq!(results.len(), total_campaign_paths());
    for probe in &results {
        assert!(probe.found.is_none());
        assert_eq!(probe.attempts.len(), 4, "path {}", probe.path);
        for attempt in &probe.attempts {
            assert!(
                matches!(attempt.outcome, AttemptOutcome::Transport { .. }),
                "path {} scheme {:?}",
                probe.path,
                attempt.scheme
            );
        }
    }
}
