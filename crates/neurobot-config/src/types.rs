// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! These structs map to sections in `neurobot.toml`:
//!
//! ```toml
//! [presets.rs]
//! a = 0.03
//! # ... b, c, d, C, k, vr, vt, vp, vn, tau
//!
//! [gains.single]
//! preset = "forwards"   # optional base, then per-gain overrides
//! gexc = 20.0
//!
//! [gains.double]
//! ginh = -1000.0
//!
//! [feedback]
//! single_sided_gain = 25.0
//! double_sided_gain = 5.0
//!
//! [logging]
//! level = "info"
//! ```

use neurobot_cpg::{CpgGains, FeedbackGains, Topology, Variant};
use neurobot_neural::PresetTable;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NeurobotConfig {
    /// Cell-type presets by name (`rs`, `lts`, ...)
    pub presets: PresetTable,
    pub gains: GainsConfig,
    pub feedback: FeedbackGains,
    pub logging: LoggingConfig,
}

impl NeurobotConfig {
    /// Gains used to build `variant`
    pub fn gains_for(&self, variant: Variant) -> CpgGains {
        match variant.topology() {
            Topology::Single => self.gains.single,
            Topology::Double => self.gains.double,
        }
    }
}

/// Gain sets per topology
///
/// A partial section only replaces the gains it names; everything else
/// comes from the topology's defaults (or from `preset` when given).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGainsConfig")]
pub struct GainsConfig {
    pub single: CpgGains,
    pub double: CpgGains,
}

impl Default for GainsConfig {
    fn default() -> Self {
        Self {
            single: CpgGains::single_default(),
            double: CpgGains::double_default(),
        }
    }
}

impl TryFrom<RawGainsConfig> for GainsConfig {
    type Error = String;

    fn try_from(raw: RawGainsConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            single: raw.single.resolve(CpgGains::single_default())?,
            double: raw.double.resolve(CpgGains::double_default())?,
        })
    }
}

/// `[gains]` as written in the file, before defaults are filled in
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawGainsConfig {
    single: GainOverrides,
    double: GainOverrides,
}

/// One `[gains.*]` section as written in the file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GainOverrides {
    preset: Option<String>,
    gexc: Option<f32>,
    ginh: Option<f32>,
    gffw: Option<f32>,
    gfb: Option<f32>,
    gslow: Option<f32>,
    gmusc: Option<f32>,
}

impl GainOverrides {
    fn resolve(self, fallback: CpgGains) -> Result<CpgGains, String> {
        let base = match self.preset.as_deref() {
            Some(name) => CpgGains::named(name).ok_or_else(|| {
                format!(
                    "unknown gain preset '{}', expected single, forwards, double or double-backwards",
                    name
                )
            })?,
            None => fallback,
        };
        Ok(CpgGains {
            gexc: self.gexc.unwrap_or(base.gexc),
            ginh: self.ginh.unwrap_or(base.ginh),
            gffw: self.gffw.unwrap_or(base.gffw),
            gfb: self.gfb.unwrap_or(base.gfb),
            gslow: self.gslow.unwrap_or(base.gslow),
            gmusc: self.gmusc.unwrap_or(base.gmusc),
        })
    }
}

/// Set one gain by name, returning `false` for an unknown name
pub fn set_gain(gains: &mut CpgGains, name: &str, value: f32) -> bool {
    let slot = match name {
        "gexc" => &mut gains.gexc,
        "ginh" => &mut gains.ginh,
        "gffw" => &mut gains.gffw,
        "gfb" => &mut gains.gfb,
        "gslow" => &mut gains.gslow,
        "gmusc" => &mut gains.gmusc,
        _ => return false,
    };
    *slot = value;
    true
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when no debug flags are given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurobot_neural::IzhikevichParameters;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config: NeurobotConfig = toml::from_str("").unwrap();
        assert_eq!(config, NeurobotConfig::default());
    }

    #[test]
    fn test_partial_double_gains_keep_double_defaults() {
        let config: NeurobotConfig = toml::from_str("[gains.double]\ngexc = 900.0\n").unwrap();
        assert_eq!(config.gains.double.gexc, 900.0);
        assert_eq!(config.gains.double.ginh, -1000.0);
        assert_eq!(config.gains.single, CpgGains::single_default());
    }

    #[test]
    fn test_gain_preset_base() {
        let config: NeurobotConfig =
            toml::from_str("[gains.single]\npreset = \"forwards\"\ngmusc = 2.0\n").unwrap();
        assert_eq!(config.gains.single.ginh, 60.0);
        assert_eq!(config.gains.single.gmusc, 2.0);
    }

    #[test]
    fn test_unknown_gain_preset_rejected() {
        let result: Result<NeurobotConfig, _> = toml::from_str("[gains.single]\npreset = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_preset_section_replaces_table() {
        let doc = r#"
            [presets.rs]
            a = 0.02
            b = -2.0
            c = -50.0
            d = 100.0
            C = 100.0
            k = 0.7
            vr = -60.0
            vt = -40.0
            vp = 25.0
            vn = 0.0
            tau = 5.0
        "#;
        let config: NeurobotConfig = toml::from_str(doc).unwrap();
        assert_eq!(config.presets.len(), 1);
        assert_eq!(config.presets.get("rs").unwrap().a, 0.02);
        assert_ne!(
            *config.presets.get("rs").unwrap(),
            IzhikevichParameters::regular_spiking()
        );
    }

    #[test]
    fn test_gains_for_variant() {
        let config = NeurobotConfig::default();
        assert_eq!(config.gains_for(Variant::SingleFeedback), CpgGains::single_default());
        assert_eq!(config.gains_for(Variant::Double), CpgGains::double_default());
    }

    #[test]
    fn test_set_gain() {
        let mut gains = CpgGains::default();
        assert!(set_gain(&mut gains, "gfb", 9.0));
        assert_eq!(gains.gfb, 9.0);
        assert!(!set_gain(&mut gains, "gfoo", 1.0));
    }
}
