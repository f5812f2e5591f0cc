//! Configuration management for the Contact Book MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is picked up if present; nothing is printed to stdout, which
//! MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Name reported to MCP clients when none is configured.
pub const DEFAULT_SERVER_NAME: &str = "contact-book-mcp-server";

/// Configuration for the Contact Book MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Server name advertised in the MCP handshake
    pub server_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_SERVER_NAME`: Server name (default: "contact-book-mcp-server")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = Self::parse_log_level(env::var("LOG_LEVEL").ok())?;

        let server_name = match env::var("CONTACT_BOOK_SERVER_NAME") {
            Ok(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_SERVER_NAME".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(name) => name.trim().to_string(),
            Err(_) => DEFAULT_SERVER_NAME.to_string(),
        };

        Ok(Config {
            log_level,
            server_name,
        })
    }

    /// Normalize a log level, falling back to "error" when unset.
    fn parse_log_level(value: Option<String>) -> ConfigResult<String> {
        let Some(value) = value else {
            return Ok("error".to_string());
        };

        let level = value.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), value),
            });
        }
        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}
