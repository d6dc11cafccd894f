//! Authorization header variants for probe attempts.
//!
//! Responsibilities:
//! - Define the fixed, ordered set of Authorization schemes tried per path.
//! - Format the Authorization header value for each scheme.
//!
//! Does NOT handle:
//! - Issuing requests or classifying responses (see `probe` module).
//! - Credential acquisition (see the config crate).
//!
//! Invariants:
//! - `AUTH_SCHEMES` order is the trial order: ApiKey, Bearer, Basic, then no
//!   Authorization header at all. The probe stops at the first 200.
//! - Every attempt carries the Kibana anti-forgery header regardless of scheme.

use secrecy::{ExposeSecret, SecretString};

/// Kibana anti-forgery header name, required on API requests.
pub const XSRF_HEADER: &str = "kbn-xsrf";

/// Value sent for the anti-forgery header.
pub const XSRF_VALUE: &str = "true";

/// One way of constructing (or omitting) the Authorization header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: ApiKey <key>` (Elasticsearch API key format).
    ApiKey,
    /// `Authorization: Bearer <key>`.
    Bearer,
    /// `Authorization: Basic <key>` (the key is presented as-is, already encoded).
    Basic,
    /// No Authorization header.
    Anonymous,
}

/// Fixed trial order for the auth schemes.
pub const AUTH_SCHEMES: [AuthScheme; 4] = [
    AuthScheme::ApiKey,
    AuthScheme::Bearer,
    AuthScheme::Basic,
    AuthScheme::Anonymous,
];

impl AuthScheme {
    /// Human-readable label used in report lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::ApiKey => "ApiKey",
            Self::Bearer => "Bearer",
            Self::Basic => "Basic",
            Self::Anonymous => "No Auth",
        }
    }

    /// Format the Authorization header value, or `None` for the anonymous scheme.
    pub fn authorization(self, api_key: &SecretString) -> Option<String> {
        match self {
            Self::ApiKey => Some(format!("ApiKey {}", api_key.expose_secret())),
            Self::Bearer => Some(format!("Bearer {}", api_key.expose_secret())),
            Self::Basic => Some(format!("Basic {}", api_key.expose_secret())),
            Self::Anonymous => None,
        }
    }
}
