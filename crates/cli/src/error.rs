//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError to the configuration exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - The process exits 0 even when every probe fails: absence of endpoints is
//!   a valid answer, not an error.

use mcp_probe_config::ConfigError;

/// Structured exit codes for mcp-probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the campaign ran to completion (found endpoints or not).
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - missing API key, invalid URL, bad env values.
    ///
    /// Scripts should fix the configuration and not retry the same invocation.
    ConfigurationError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is not a ConfigError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigurationError;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigurationError.as_i32(), 2);
    }

    #[test]
    fn test_config_error_maps_to_configuration_exit_code() {
        let err = anyhow::Error::new(ConfigError::MissingApiKey);
        assert_eq!(err.exit_code(), ExitCode::ConfigurationError);
    }

    #[test]
    fn test_config_error_in_chain_maps_to_configuration_exit_code() {
        let err = anyhow::Error::new(ConfigError::MissingApiKey).context("loading configuration");
        assert_eq!(err.exit_code(), ExitCode::ConfigurationError);
    }

    #[test]
    fn test_other_errors_map_to_general_exit_code() {
        let err = anyhow::anyhow!("something else went wrong");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
