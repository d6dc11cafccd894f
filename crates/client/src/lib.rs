//! Probe client for a Kibana management API.
//!
//! This crate provides the HTTP probing primitives for the MCP endpoint
//! probe: a reqwest-based client, the fixed Authorization scheme table, the
//! per-path auth trial, and the campaign phase tables as declarative data.

pub mod auth;
pub mod campaign;
pub mod client;
pub mod error;
pub mod probe;

pub use auth::{AUTH_SCHEMES, AuthScheme, XSRF_HEADER, XSRF_VALUE};
pub use campaign::{ProbePhase, campaign_phases};
pub use client::ProbeClient;
pub use client::builder::ProbeClientBuilder;
pub use error::{ClientError, Result};
pub use probe::{
    AttemptOutcome, AuthAttempt, BODY_SNIPPET_MAX_CHARS, Classification, FoundEndpoint, PathProbe,
};
