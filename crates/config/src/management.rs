//! Management-URL derivation.
//!
//! Responsibilities:
//! - Rewrite an Elastic Cloud data-plane (Elasticsearch) URL into the
//!   corresponding management-plane (Kibana) URL.
//! - Fall back to the literal default console URL when no URL is supplied.
//!
//! Does NOT handle:
//! - URL syntax validation (see `ConfigLoader::build`).
//! - Trailing-slash normalization (see the client builder).
//!
//! Invariants:
//! - Only the FIRST occurrence of the data-plane marker is replaced; the rest
//!   of the string is left byte-for-byte unchanged.
//! - A URL without the marker passes through unchanged.

use crate::constants::{DATA_PLANE_MARKER, DEFAULT_MANAGEMENT_URL, MANAGEMENT_PLANE_MARKER};

/// Derive the management console URL from an optional data-plane URL.
///
/// Elastic Cloud deployments expose paired hostnames that differ only in a
/// plane marker (`.es.` for Elasticsearch, `.kb.` for Kibana). A supplied URL
/// containing the data-plane marker is rewritten to its Kibana counterpart;
/// any other URL is used as-is; no URL at all falls back to the default
/// console URL.
pub fn management_url(base_url: Option<&str>) -> String {
    match base_url {
        Some(url) if url.contains(DATA_PLANE_MARKER) => {
            url.replacen(DATA_PLANE_MARKER, MANAGEMENT_PLANE_MARKER, 1)
        }
        Some(url) => url.to_string(),
        None => DEFAULT_MANAGEMENT_URL.to_string(),
    }
}
