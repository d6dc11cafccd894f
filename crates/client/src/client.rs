//! Management-console probe client.
//!
//! This module provides the primary [`ProbeClient`] for issuing probe
//! requests against a Kibana management API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Request issuing and response classification (see [`crate::probe`])
//! - The campaign path tables (see [`crate::campaign`])
//! - Authorization header formatting (see [`crate::auth`])
//!
//! # Invariants
//! - `base_url` has no trailing slash, so paths can be appended directly.
//! - The client holds exactly one credential; per-request auth variance comes
//!   from how that credential is presented, not from multiple credentials.

pub mod builder;

use secrecy::SecretString;

/// Probe client for a Kibana management API.
///
/// # Creating a Client
///
/// Use [`ProbeClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use mcp_probe_client::ProbeClient;
/// use secrecy::SecretString;
///
/// let client = ProbeClient::builder()
///     .base_url("https://deployment.kb.us-east-1.aws.elastic.cloud".to_string())
///     .api_key(SecretString::new("my-key".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct ProbeClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
}

impl ProbeClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`ProbeClient`].
    pub fn builder() -> builder::ProbeClientBuilder {
        builder::ProbeClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    #[test]
    fn test_client_builder_basic() {
        let client = ProbeClient::builder()
            .base_url("https://deployment.kb.example.cloud".to_string())
            .api_key(SecretString::new("key".to_string().into()))
            .build();

        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().base_url(),
            "https://deployment.kb.example.cloud"
        );
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let result = ProbeClient::builder()
            .api_key(SecretString::new("key".to_string().into()))
            .build();

        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_builder_missing_api_key() {
        let result = ProbeClient::builder()
            .base_url("https://deployment.kb.example.cloud".to_string())
            .build();

        assert!(matches!(result, Err(ClientError::MissingApiKey)));
    }
}
