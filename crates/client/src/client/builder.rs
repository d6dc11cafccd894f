//! Client builder for constructing [`ProbeClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, api_key)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Issuing probe requests (see [`crate::probe`])
//! - Credential loading from env/.env (see the config crate)
//!
//! # Invariants
//! - `base_url` and `api_key` are required fields and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning
//! - No retry machinery is configured: each probe attempt is sent exactly once

use std::time::Duration;

use secrecy::SecretString;

use crate::client::ProbeClient;
use crate::error::{ClientError, Result};
use mcp_probe_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`ProbeClient`].
///
/// All configuration options have sensible defaults except for `base_url`
/// and `api_key`, which are required.
pub struct ProbeClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for ProbeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProbeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the management console.
    ///
    /// This should include the protocol, e.g.
    /// `https://deployment.kb.us-east-1.aws.elastic.cloud`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key presented under each Authorization scheme.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// This centralizes the conversion from config crate types, so the CLI
    /// does not reassemble connection settings by hand.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_key = Some(config.auth.api_key.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with probe paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`ProbeClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::MissingApiKey`] if `api_key` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ProbeClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let api_key = self.api_key.ok_or(ClientError::MissingApiKey)?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            let is_https = base_url.starts_with("https://");
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(ProbeClient {
            http,
            base_url,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> SecretString {
        SecretString::new("test-key".to_string().into())
    }

    #[test]
    fn test_from_config() {
        let config = Config::with_api_key(
            "https://deployment.kb.example.cloud".to_string(),
            test_key(),
        );

        let client = ProbeClient::builder().from_config(&config).build();

        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().base_url(),
            "https://deployment.kb.example.cloud"
        );
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_api_key(
            "https://deployment.kb.example.cloud".to_string(),
            test_key(),
        );
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);

        let builder = ProbeClient::builder().from_config(&config);

        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        let input = "https://deployment.kb.example.cloud/".to_string();
        let expected = "https://deployment.kb.example.cloud";
        assert_eq!(ProbeClientBuilder::normalize_base_url(input), expected);
    }

    #[test]
    fn test_normalize_base_url_no_trailing_slash() {
        let input = "https://deployment.kb.example.cloud".to_string();
        let expected = "https://deployment.kb.example.cloud";
        assert_eq!(ProbeClientBuilder::normalize_base_url(input), expected);
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        let input = "https://deployment.kb.example.cloud//".to_string();
        let expected = "https://deployment.kb.example.cloud";
        assert_eq!(ProbeClientBuilder::normalize_base_url(input), expected);
    }
}
