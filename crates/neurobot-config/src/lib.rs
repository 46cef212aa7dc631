// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # Neurobot Configuration System
//!
//! Type-safe configuration for the CPG compiler with support for:
//! - TOML file parsing (`neurobot.toml`)
//! - Environment variable overrides (`NEUROBOT_*`)
//! - CLI argument overrides (`key=value`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neurobot_config::{load_config, validate_config};
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! validate_config(&config).expect("Invalid config");
//!
//! println!("Single-ring Gexc: {}", config.gains.single.gexc);
//! ```
//!
//! Every section is optional. A missing file means built-in defaults.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    CONFIG_FILE_NAME, CONFIG_PATH_ENV,
};
pub use types::*;
pub use validation::{collect_errors, validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
