//! Configuration management for the MCP endpoint probe.
//!
//! This crate provides types and loaders for managing connection
//! configuration from environment variables, `.env` files, and CLI overrides,
//! including the data-plane to management-plane URL derivation.

pub mod constants;
mod loader;
mod management;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use management::management_url;
pub use types::{AuthConfig, Config, ConnectionConfig};
