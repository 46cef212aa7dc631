// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Machine-readable description of a compiled network

use crate::Result;
use neurobot_cpg::CpgNetwork;
use neurobot_neural::CellType;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cell and synapse counts of a compiled network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub n_cells: usize,
    pub n_neurons: usize,
    pub n_muscles: usize,
    /// Nonzero entries of the connectivity matrix
    pub n_synapses: usize,
    pub cell_type_counts: BTreeMap<CellType, usize>,
}

impl NetworkSummary {
    pub fn from_network(network: &CpgNetwork) -> Self {
        let mut cell_type_counts = BTreeMap::new();
        for &cell_type in network.cell_types() {
            *cell_type_counts.entry(cell_type).or_insert(0) += 1;
        }
        Self {
            n_cells: network.n_cells(),
            n_neurons: network.n_neurons(),
            n_muscles: network.n_muscles(),
            n_synapses: network.connectivity().iter().filter(|&&w| w != 0.0).count(),
            cell_type_counts,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
