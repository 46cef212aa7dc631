// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Cell-type resolution.

Turns one excitatory/inhibitory flag per neuron into a type label and a full
parameter set. Every parameter of a cell comes from the same preset; a
missing preset fails the whole resolution.
*/

use neurobot_neural::{CellParameterArrays, CellType, PresetTable, Result};
use tracing::debug;

/// Labels and per-cell parameter vectors for a set of neurons
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCells {
    pub labels: Vec<CellType>,
    pub parameters: CellParameterArrays,
}

impl ResolvedCells {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Resolve `is_excitatory` against `presets`
pub fn resolve_cell_types(is_excitatory: &[bool], presets: &PresetTable) -> Result<ResolvedCells> {
    let labels: Vec<CellType> = is_excitatory
        .iter()
        .map(|&exc| CellType::from_is_excitatory(exc))
        .collect();

    let mut parameters = CellParameterArrays::with_capacity(labels.len());
    for &cell_type in &labels {
        parameters.push(presets.resolve(cell_type)?);
    }

    debug!(
        n_cells = labels.len(),
        n_excitatory = labels.iter().filter(|t| t.is_excitatory()).count(),
        "Resolved cell types"
    );

    Ok(ResolvedCells { labels, parameters })
}
