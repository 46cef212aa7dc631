// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base values over built-in defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::types::set_gain;
use crate::{ConfigError, ConfigResult, NeurobotConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name searched for in the working directory and its parents
pub const CONFIG_FILE_NAME: &str = "neurobot.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "NEUROBOT_CONFIG_PATH";

/// Find the Neurobot configuration file
///
/// Search order:
/// 1. `NEUROBOT_CONFIG_PATH` environment variable
/// 2. Current working directory: `./neurobot.toml`
/// 3. Up to 5 parent directories
///
/// Returns `Ok(None)` when nothing is found.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if `NEUROBOT_CONFIG_PATH` names a
/// file that does not exist
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by {} not found: {}",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    let found = search_paths.into_iter().find(|path| path.exists());
    if found.is_none() {
        debug!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
    }
    Ok(found)
}

/// Load configuration
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if an explicit config file is missing, contains invalid
/// TOML, or a CLI override is malformed. Call
/// [`validate_config`](crate::validate_config) afterwards for value checks.
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<NeurobotConfig> {
    let config_file = match config_path {
        Some(path) if !path.exists() => {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file()?,
    };

    let mut config = match &config_file {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            debug!(path = %path.display(), "Loaded configuration file");
            toml::from_str(&content)?
        }
        None => NeurobotConfig::default(),
    };

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `NEUROBOT_LOG_LEVEL` -> `logging.level`
/// - `NEUROBOT_SINGLE_SIDED_GAIN` -> `feedback.single_sided_gain`
/// - `NEUROBOT_DOUBLE_SIDED_GAIN` -> `feedback.double_sided_gain`
/// - `NEUROBOT_SINGLE_<GAIN>` -> `gains.single.<gain>` (e.g. `NEUROBOT_SINGLE_GEXC`)
/// - `NEUROBOT_DOUBLE_<GAIN>` -> `gains.double.<gain>`
///
/// Values that do not parse are logged and ignored.
pub fn apply_environment_overrides(config: &mut NeurobotConfig) {
    if let Ok(value) = env::var("NEUROBOT_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Some(gain) = env_f32("NEUROBOT_SINGLE_SIDED_GAIN") {
        config.feedback.single_sided_gain = gain;
    }
    if let Some(gain) = env_f32("NEUROBOT_DOUBLE_SIDED_GAIN") {
        config.feedback.double_sided_gain = gain;
    }

    for (name, _) in config.gains.single.as_array() {
        if let Some(value) = env_f32(&format!("NEUROBOT_SINGLE_{}", name.to_uppercase())) {
            set_gain(&mut config.gains.single, name, value);
        }
        if let Some(value) = env_f32(&format!("NEUROBOT_DOUBLE_{}", name.to_uppercase())) {
            set_gain(&mut config.gains.double, name, value);
        }
    }
}

fn env_f32(key: &str) -> Option<f32> {
    let value = env::var(key).ok()?;
    match value.parse::<f32>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(key, value = %value, "Ignoring non-numeric environment override");
            None
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"single.gexc": "30", "log_level": "debug"}`)
///
/// Accepted keys: `single.<gain>`, `double.<gain>`,
/// `feedback.single_sided_gain`, `feedback.double_sided_gain`,
/// `log_level` (or `logging.level`).
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unknown key or a non-numeric gain
pub fn apply_cli_overrides(
    config: &mut NeurobotConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    for (key, value) in cli_args {
        match key.as_str() {
            "log_level" | "logging.level" => config.logging.level = value.clone(),
            "feedback.single_sided_gain" => {
                config.feedback.single_sided_gain = parse_f32(key, value)?;
            }
            "feedback.double_sided_gain" => {
                config.feedback.double_sided_gain = parse_f32(key, value)?;
            }
            other => {
                let (gains, name) = match other.split_once('.') {
                    Some(("single", name)) => (&mut config.gains.single, name),
                    Some(("double", name)) => (&mut config.gains.double, name),
                    _ => {
                        return Err(ConfigError::InvalidValue(format!(
                            "unknown override key '{}'",
                            key
                        )))
                    }
                };
                let parsed = parse_f32(key, value)?;
                if !set_gain(gains, name, parsed) {
                    return Err(ConfigError::InvalidValue(format!(
                        "unknown gain '{}' in '{}'",
                        name, key
                    )));
                }
            }
        }
    }
    Ok(())
}

fn parse_f32(key: &str, value: &str) -> ConfigResult<f32> {
    value
        .parse::<f32>()
        .map_err(|_| ConfigError::InvalidValue(format!("{} = '{}' is not a number", key, value)))
}
