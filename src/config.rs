//! Configuration management for the Polls MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read through `dotenvy`, which does not print to stdout.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default maximum length of question and choice text.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 200;

/// Upper bound accepted for `POLLS_MAX_TEXT_LENGTH`.
const MAX_TEXT_LENGTH_LIMIT: usize = 10_000;

/// Configuration for the Polls MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON seed file loaded at start-up
    pub seed_file: Option<PathBuf>,

    /// Maximum characters in question and choice text (default: 200)
    pub max_text_length: usize,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `POLLS_SEED_FILE`: Path to a JSON seed file (must exist if set)
    /// - `POLLS_MAX_TEXT_LENGTH`: Max text length, 1-10000 (default: 200)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let seed_file = match env::var("POLLS_SEED_FILE") {
            Ok(path) if !path.trim().is_empty() => {
                let path = PathBuf::from(path.trim());
                if !path.is_file() {
                    return Err(ConfigError::InvalidValue {
                        var: "POLLS_SEED_FILE".to_string(),
                        reason: format!("File not found: {}", path.display()),
                    });
                }
                Some(path)
            }
            _ => None,
        };

        let max_text_length =
            Self::parse_env_usize("POLLS_MAX_TEXT_LENGTH", DEFAULT_MAX_TEXT_LENGTH)?;
        if max_text_length == 0 || max_text_length > MAX_TEXT_LENGTH_LIMIT {
            return Err(ConfigError::InvalidValue {
                var: "POLLS_MAX_TEXT_LENGTH".to_string(),
                reason: format!("Must be between 1 and {}", MAX_TEXT_LENGTH_LIMIT),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            seed_file,
            max_text_length,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_file: None,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            log_level: "error".to_string(),
        }
    }
}
