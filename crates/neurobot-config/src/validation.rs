// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Every check runs; all problems are reported together.

use crate::{ConfigError, ConfigResult, NeurobotConfig};
use neurobot_cpg::CpgGains;
use neurobot_neural::{CellType, ModelParameters};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    MissingPreset { name: String },
    InvalidPreset { name: String, reason: String },
    NonFinite { field: String, value: f32 },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPreset { name } => {
                write!(f, "Missing required preset: presets.{}", name)
            }
            Self::InvalidPreset { name, reason } => {
                write!(f, "Invalid preset presets.{}: {}", name, reason)
            }
            Self::NonFinite { field, value } => {
                write!(f, "{} = {} is not a finite number", field, value)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Presets required by the cell types (`rs`, `lts`)
/// - Every preset value finite, `C` and `tau` strictly positive
/// - Every gain finite
/// - Feedback gains finite
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with details if validation fails
pub fn validate_config(config: &NeurobotConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

/// Every problem found in `config`, in a stable order
pub fn collect_errors(config: &NeurobotConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    validate_presets(config, &mut errors);
    validate_gains("gains.single", &config.gains.single, &mut errors);
    validate_gains("gains.double", &config.gains.double, &mut errors);
    validate_feedback(config, &mut errors);
    errors
}

fn validate_presets(config: &NeurobotConfig, errors: &mut Vec<ConfigValidationError>) {
    for cell_type in [CellType::Excitatory, CellType::Inhibitory] {
        let name = cell_type.preset_name();
        if !config.presets.contains(name) {
            errors.push(ConfigValidationError::MissingPreset {
                name: name.to_string(),
            });
        }
    }

    for (name, params) in config.presets.iter() {
        if let Err(reason) = params.validate() {
            errors.push(ConfigValidationError::InvalidPreset {
                name: name.to_string(),
                reason: reason.to_string(),
            });
        }
    }
}

fn validate_gains(section: &str, gains: &CpgGains, errors: &mut Vec<ConfigValidationError>) {
    for (name, value) in gains.as_array() {
        if !value.is_finite() {
            errors.push(ConfigValidationError::NonFinite {
                field: format!("{}.{}", section, name),
                value,
            });
        }
    }
}

fn validate_feedback(config: &NeurobotConfig, errors: &mut Vec<ConfigValidationError>) {
    let feedback = &config.feedback;
    for (field, value) in [
        ("feedback.single_sided_gain", feedback.single_sided_gain),
        ("feedback.double_sided_gain", feedback.double_sided_gain),
    ] {
        if !value.is_finite() {
            errors.push(ConfigValidationError::NonFinite {
                field: field.to_string(),
                value,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurobot_neural::{IzhikevichParameters, PresetTable};

    #[test]
    fn test_default_config_is_valid() {
        assert!(collect_errors(&NeurobotConfig::default()).is_empty());
    }

    #[test]
    fn test_missing_preset() {
        let config = NeurobotConfig {
            presets: PresetTable::empty()
                .with_preset("rs", IzhikevichParameters::regular_spiking()),
            ..Default::default()
        };
        assert_eq!(
            collect_errors(&config),
            vec![ConfigValidationError::MissingPreset {
                name: "lts".to_string()
            }]
        );
    }

    #[test]
    fn test_all_errors_reported_together() {
        let mut bad = IzhikevichParameters::low_threshold_spiking();
        bad.tau = 0.0;
        let mut config = NeurobotConfig {
            presets: PresetTable::default().with_preset("lts", bad),
            ..Default::default()
        };
        config.gains.double.gslow = f32::NAN;
        config.feedback.single_sided_gain = f32::INFINITY;

        let errors = collect_errors(&config);
        assert_eq!(errors.len(), 3);

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("presets.lts"));
        assert!(message.contains("gains.double.gslow"));
        assert!(message.contains("feedback.single_sided_gain"));
    }
}
