// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Cell categories and the preset each one draws its parameters from

use core::fmt;
use serde::{Deserialize, Serialize};

/// Cell type (excitatory or inhibitory)
///
/// Each type resolves to exactly one named preset in a [`crate::PresetTable`]:
/// excitatory cells are regular-spiking (`rs`), inhibitory cells are
/// low-threshold-spiking (`lts`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Excitatory = 0,
    Inhibitory = 1,
}

impl CellType {
    pub fn from_is_excitatory(is_excitatory: bool) -> Self {
        if is_excitatory {
            CellType::Excitatory
        } else {
            CellType::Inhibitory
        }
    }

    pub fn is_excitatory(self) -> bool {
        matches!(self, CellType::Excitatory)
    }

    /// Key of this type's preset in the preset table
    pub fn preset_name(self) -> &'static str {
        match self {
            CellType::Excitatory => "rs",
            CellType::Inhibitory => "lts",
        }
    }

    /// Identifier used for the preset constant in emitted C source
    pub fn symbol(self) -> String {
        self.preset_name().to_uppercase()
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellType::Excitatory => write!(f, "excitatory"),
            CellType::Inhibitory => write!(f, "inhibitory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(CellType::from_is_excitatory(true).preset_name(), "rs");
        assert_eq!(CellType::from_is_excitatory(false).preset_name(), "lts");
        assert_eq!(CellType::Inhibitory.symbol(), "LTS");
    }

    #[test]
    fn test_labels() {
        assert_eq!(CellType::Excitatory.to_string(), "excitatory");
        assert_eq!(CellType::Inhibitory.to_string(), "inhibitory");
        assert!(!CellType::Inhibitory.is_excitatory());
    }
}
