// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Named parameter presets
//!
//! The table is an ordinary value handed to whoever needs it. Tests build
//! their own tables; the configuration crate deserializes one from TOML.

use super::IzhikevichParameters;
use crate::cell_type::CellType;
use crate::types::{CpgError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable mapping from preset name to parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetTable {
    presets: BTreeMap<String, IzhikevichParameters>,
}

impl PresetTable {
    /// Table with no presets at all
    pub fn empty() -> Self {
        Self {
            presets: BTreeMap::new(),
        }
    }

    pub fn with_preset(mut self, name: impl Into<String>, params: IzhikevichParameters) -> Self {
        self.presets.insert(name.into(), params);
        self
    }

    /// Look up a preset by name
    pub fn get(&self, name: &str) -> Result<&IzhikevichParameters> {
        self.presets
            .get(name)
            .ok_or_else(|| CpgError::UnresolvableCellType(name.to_string()))
    }

    /// Parameters for a cell type
    pub fn resolve(&self, cell_type: CellType) -> Result<&IzhikevichParameters> {
        self.get(cell_type.preset_name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IzhikevichParameters)> {
        self.presets.iter().map(|(name, params)| (name.as_str(), params))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetTable {
    /// `rs` and `lts`, the two presets the CPG topologies use
    fn default() -> Self {
        Self::empty()
            .with_preset(
                CellType::Excitatory.preset_name(),
                IzhikevichParameters::regular_spiking(),
            )
            .with_preset(
                CellType::Inhibitory.preset_name(),
                IzhikevichParameters::low_threshold_spiking(),
            )
    }
}
