//! Common test utilities for integration tests.
//!
//! # Invariants
//! - All tests use the same literal test key so header matchers can be
//!   written against `ApiKey test-key` / `Bearer test-key` / `Basic test-key`.

use secrecy::SecretString;

use mcp_probe_client::ProbeClient;

/// API key used by every integration test.
pub const TEST_KEY: &str = "test-key";

/// Build a probe client pointed at the given server URI.
pub fn probe_client(uri: &str) -> ProbeClient {
    ProbeClient::builder()
        .base_url(uri.to_string())
        .api_key(SecretString::new(TEST_KEY.to_string().into()))
        .build()
        .expect("failed to build probe client")
}

/// A base URL nothing listens on, for transport-failure tests.
///
/// Port 9 (discard) is reserved and closed on CI machines, so connections
/// are refused immediately instead of timing out.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";
