//! The per-path probe primitive and its outcome types.
//!
//! Responsibilities:
//! - Attempt one path under each Authorization scheme, in fixed order.
//! - Classify each response by status code; capture transport failures
//!   per attempt without aborting the remaining schemes.
//! - Short-circuit on the first 200 and capture a bounded body snippet.
//!
//! Does NOT handle:
//! - Phase iteration or report rendering (see `campaign` and the CLI).
//! - Retry or backoff: each (path, scheme) pair is attempted exactly once.
//!
//! Invariants:
//! - Scheme order is `AUTH_SCHEMES`; a 200 stops the trial for that path.
//! - A transport failure in one scheme never aborts the remaining schemes.
//! - Statuses outside the classified set are recorded raw, with no detail.

use reqwest::Method;
use reqwest::header;
use tracing::debug;

use crate::auth::{AUTH_SCHEMES, AuthScheme, XSRF_HEADER, XSRF_VALUE};
use crate::client::ProbeClient;

/// Maximum number of characters of a 200 response body retained as a snippet.
pub const BODY_SNIPPET_MAX_CHARS: usize = 200;

/// Outcome of a single request attempt under one auth scheme.
#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    /// The server answered. `detail` carries the body snippet for a 200 and
    /// the error body for a 400; it is `None` for everything else.
    Http { status: u16, detail: Option<String> },
    /// The request never produced a response (DNS, TLS, refused, timeout).
    Transport { message: String },
}

/// How a response status reads in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    AuthRequired,
    Forbidden,
    BadRequest,
    NotFound,
    /// Statuses with no dedicated report line (e.g. 429, 500). Recorded raw.
    Unclassified,
}

impl Classification {
    /// Classify an HTTP status code.
    pub fn of(status: u16) -> Self {
        match status {
            200 => Self::Success,
            401 => Self::AuthRequired,
            403 => Self::Forbidden,
            400 => Self::BadRequest,
            404 => Self::NotFound,
            _ => Self::Unclassified,
        }
    }
}

/// One attempt: which scheme was used and what came back.
#[derive(Debug, Clone)]
pub struct AuthAttempt {
    pub scheme: AuthScheme,
    pub outcome: AttemptOutcome,
}

/// The scheme and body snippet of a successful (200) attempt.
#[derive(Debug, Clone)]
pub struct FoundEndpoint {
    pub scheme: AuthScheme,
    pub body_snippet: String,
}

/// Result of probing one path under every auth scheme.
///
/// Transient by design: nothing here is persisted, it exists only to be
/// rendered into the report.
#[derive(Debug, Clone)]
pub struct PathProbe {
    pub path: String,
    pub method: Method,
    /// Attempts in trial order; shorter than four entries only when an
    /// earlier scheme returned 200.
    pub attempts: Vec<AuthAttempt>,
    pub found: Option<FoundEndpoint>,
}

/// Truncate a string to at most `max` characters (not bytes).
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

impl ProbeClient {
    /// Probe one path under each auth scheme, stopping at the first 200.
    ///
    /// The optional `body` is serialized as JSON; every attempt carries the
    /// anti-forgery header and a JSON content type. This never returns an
    /// error: transport failures are recorded on the attempt so the caller
    /// can keep iterating paths.
    pub async fn probe_path(
        &self,
        path: &str,
        method: Method,
        body: Option<&serde_json::Value>,
    ) -> PathProbe {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, method = %method, "probing path");

        let mut attempts = Vec::with_capacity(AUTH_SCHEMES.len());
        let mut found = None;

        for scheme in AUTH_SCHEMES {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(header::CONTENT_TYPE, "application/json")
                .header(XSRF_HEADER, XSRF_VALUE);

            if let Some(value) = scheme.authorization(&self.api_key) {
                request = request.header(header::AUTHORIZATION, value);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let detail = match Classification::of(status) {
                        Classification::Success => {
                            let text = response.text().await.unwrap_or_default();
                            Some(truncate_chars(&text, BODY_SNIPPET_MAX_CHARS))
                        }
                        Classification::BadRequest => {
                            Some(response.text().await.unwrap_or_default())
                        }
                        _ => None,
                    };

                    let success = status == 200;
                    if success {
                        found = Some(FoundEndpoint {
                            scheme,
                            body_snippet: detail.clone().unwrap_or_default(),
                        });
                    }
                    attempts.push(AuthAttempt {
                        scheme,
                        outcome: AttemptOutcome::Http { status, detail },
                    });
                    if success {
                        break;
                    }
                }
                Err(e) => {
                    attempts.push(AuthAttempt {
                        scheme,
                        outcome: AttemptOutcome::Transport {
                            message: e.to_string(),
                        },
                    });
                }
            }
        }

        PathProbe {
            path: path.to_string(),
            method,
            attempts,
            found,
        }
    }
}
