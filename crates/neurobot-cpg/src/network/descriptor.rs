// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
CPG network descriptor.

Binds a connectivity matrix, one cell type per cell, the neuron/muscle
partition and a feedback policy into a single immutable value. Construction
either succeeds completely or returns an error; there is no half-built state.

Cells `0..n_neurons` are oscillator neurons; cells `n_neurons..n_cells` are
muscle cells. Muscle cells are never type-resolved from the flag sequence.
They carry the excitatory preset so that per-cell tables stay dense.
*/

use crate::cell_types::resolve_cell_types;
use crate::connectivity::connectivity;
use crate::network::feedback::FeedbackPolicy;
use crate::network::gains::{CpgGains, FeedbackGains};
use crate::network::topology::{ActivationPolicy, Topology};
use crate::network::variant::Variant;
use ndarray::Array2;
use neurobot_neural::{
    CellParameterArrays, CellType, CpgError, IzhikevichParameters, NetworkParameters,
    PresetTable, Result,
};
use tracing::info;

/// Cell type assigned to every muscle cell
pub const MUSCLE_CELL_TYPE: CellType = CellType::Excitatory;

/// A compiled central pattern generator
#[derive(Debug, Clone, PartialEq)]
pub struct CpgNetwork {
    connectivity: Array2<f32>,
    cell_types: Vec<CellType>,
    parameters: CellParameterArrays,
    n_neurons: usize,
    activation: ActivationPolicy,
    feedback: FeedbackPolicy,
}

impl CpgNetwork {
    /// Assemble a network from an already built matrix
    ///
    /// `is_excitatory` covers the neurons only, so its length must equal
    /// `n_neurons`. The matrix must be square with at least `n_neurons` rows.
    pub fn from_parts(
        connectivity: Array2<f32>,
        is_excitatory: &[bool],
        n_neurons: usize,
        presets: &PresetTable,
        activation: ActivationPolicy,
        feedback: FeedbackPolicy,
    ) -> Result<Self> {
        let (rows, cols) = connectivity.dim();
        if rows != cols {
            return Err(CpgError::ConfigurationMismatch(format!(
                "connectivity matrix is {}x{}, expected a square matrix",
                rows, cols
            )));
        }
        let n_cells = rows;
        if n_neurons > n_cells {
            return Err(CpgError::ConfigurationMismatch(format!(
                "{} neurons declared but the matrix only has {} cells",
                n_neurons, n_cells
            )));
        }
        if is_excitatory.len() != n_neurons {
            return Err(CpgError::ConfigurationMismatch(format!(
                "{} excitatory flags for {} neurons",
                is_excitatory.len(),
                n_neurons
            )));
        }
        let n_muscles = n_cells - n_neurons;
        feedback.validate_for(n_neurons, n_muscles)?;

        let resolved = resolve_cell_types(is_excitatory, presets)?;
        let mut cell_types = resolved.labels;
        let mut parameters = resolved.parameters;
        if n_muscles > 0 {
            let muscle_params = presets.resolve(MUSCLE_CELL_TYPE)?;
            for _ in 0..n_muscles {
                cell_types.push(MUSCLE_CELL_TYPE);
                parameters.push(muscle_params);
            }
        }

        Ok(Self {
            connectivity,
            cell_types,
            parameters,
            n_neurons,
            activation,
            feedback,
        })
    }

    /// Compile one of the fixed topologies
    pub fn build(
        topology: Topology,
        gains: &CpgGains,
        feedback: FeedbackPolicy,
        presets: &PresetTable,
    ) -> Result<Self> {
        let layout = topology.layout();
        layout.validate()?;

        let edges = layout.edges(gains);
        let matrix = connectivity(&edges, layout.n_cells)?;
        let network = Self::from_parts(
            matrix,
            &layout.is_excitatory(),
            layout.n_neurons,
            presets,
            layout.activation,
            feedback,
        )?;

        info!(
            topology = topology.name(),
            n_cells = network.n_cells(),
            n_neurons = network.n_neurons(),
            n_edges = edges.len(),
            closed_loop = feedback.is_closed_loop(),
            "Compiled CPG network"
        );
        Ok(network)
    }

    /// Compile a named variant with its feedback gain
    pub fn for_variant(
        variant: Variant,
        gains: &CpgGains,
        feedback_gains: &FeedbackGains,
        presets: &PresetTable,
    ) -> Result<Self> {
        Self::build(
            variant.topology(),
            gains,
            variant.feedback_policy(feedback_gains),
            presets,
        )
    }

    /// Total cell count `N`
    pub fn n_cells(&self) -> usize {
        self.cell_types.len()
    }

    pub fn n_neurons(&self) -> usize {
        self.n_neurons
    }

    pub fn n_muscles(&self) -> usize {
        self.n_cells() - self.n_neurons
    }

    /// `G[[target, source]]`
    pub fn connectivity(&self) -> &Array2<f32> {
        &self.connectivity
    }

    /// Type of every cell, muscles included
    pub fn cell_types(&self) -> &[CellType] {
        &self.cell_types
    }

    pub fn parameters(&self) -> &CellParameterArrays {
        &self.parameters
    }

    pub fn activation(&self) -> ActivationPolicy {
        self.activation
    }

    pub fn feedback(&self) -> FeedbackPolicy {
        self.feedback
    }

    /// Distinct cell types with their parameters, in order of first use
    pub fn presets_in_use(&self) -> Vec<(CellType, IzhikevichParameters)> {
        let mut seen: Vec<(CellType, IzhikevichParameters)> = Vec::new();
        for (cell, cell_type) in self.cell_types.iter().enumerate() {
            if seen.iter().any(|(t, _)| t == cell_type) {
                continue;
            }
            if let Some(params) = self.parameters.get(cell) {
                seen.push((*cell_type, params));
            }
        }
        seen
    }

    /// Construction inputs for a dynamics collaborator
    pub fn simulation_parameters(&self) -> NetworkParameters<'_> {
        NetworkParameters {
            connectivity: &self.connectivity,
            cells: &self.parameters,
            n_cells: self.n_cells(),
        }
    }

    /// Proprioceptive current for every neuron
    pub fn propriocept(&self, pos: &[f32]) -> Result<Vec<f32>> {
        self.feedback.current(pos, self.n_neurons)
    }

    /// Input current for every cell: proprioception, then zeros for muscles
    pub fn input_current(&self, pos: &[f32]) -> Result<Vec<f32>> {
        let mut current = self.propriocept(pos)?;
        current.resize(self.n_cells(), 0.0);
        Ok(current)
    }

    /// Antagonist signal per muscle from the cell potentials `v`
    ///
    /// `act[k] = V[m + k] - V[m + (k - 2) mod M]` with `m = n_neurons` and
    /// `M = n_muscles`, then the topology's activation policy.
    pub fn muscle_activations(&self, v: &[f32]) -> Result<Vec<f32>> {
        if v.len() != self.n_cells() {
            return Err(CpgError::ConfigurationMismatch(format!(
                "{} potentials for {} cells",
                v.len(),
                self.n_cells()
            )));
        }
        let muscles = &v[self.n_neurons..];
        let count = muscles.len();
        Ok((0..count)
            .map(|k| {
                // Antagonist sits two muscles back around the body
                let antagonist = (k as isize - 2).rem_euclid(count as isize) as usize;
                self.activation.apply(muscles[k] - muscles[antagonist])
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_network_partition() {
        let network = CpgNetwork::build(
            Topology::Single,
            &CpgGains::single_default(),
            FeedbackPolicy::None,
            &PresetTable::default(),
        )
        .unwrap();
        assert_eq!(network.n_cells(), 16);
        assert_eq!(network.n_neurons(), 12);
        assert_eq!(network.n_muscles(), 4);
        assert_eq!(network.cell_types()[2], CellType::Inhibitory);
        assert_eq!(network.cell_types()[15], MUSCLE_CELL_TYPE);
        assert_eq!(network.parameters().len(), 16);
    }

    #[test]
    fn test_flag_count_mismatch() {
        let result = CpgNetwork::from_parts(
            Array2::zeros((16, 16)),
            &[true; 16],
            12,
            &PresetTable::default(),
            ActivationPolicy::Raw,
            FeedbackPolicy::None,
        );
        assert!(matches!(result, Err(CpgError::ConfigurationMismatch(_))));
    }

    #[test]
    fn test_missing_muscle_preset() {
        let presets =
            PresetTable::empty().with_preset("lts", IzhikevichParameters::low_threshold_spiking());
        let result = CpgNetwork::from_parts(
            Array2::zeros((2, 2)),
            &[false],
            1,
            &presets,
            ActivationPolicy::Raw,
            FeedbackPolicy::None,
        );
        assert_eq!(result, Err(CpgError::UnresolvableCellType("rs".to_string())));
    }

    #[test]
    fn test_input_current_pads_muscles() {
        let network = CpgNetwork::build(
            Topology::Single,
            &CpgGains::single_default(),
            FeedbackPolicy::SingleSided { gain: 25.0 },
            &PresetTable::default(),
        )
        .unwrap();
        let current = network.input_current(&[1.0; 4]).unwrap();
        assert_eq!(current.len(), 16);
        assert_eq!(current[9], -25.0);
        assert!(current[12..].iter().all(|&i| i == 0.0));
    }

    #[test]
    fn test_presets_in_use_first_seen_order() {
        let network = CpgNetwork::build(
            Topology::Single,
            &CpgGains::single_default(),
            FeedbackPolicy::None,
            &PresetTable::default(),
        )
        .unwrap();
        let used = network.presets_in_use();
        assert_eq!(used.len(), 2);
        assert_eq!(used[0].0, CellType::Excitatory);
        assert_eq!(used[1].1, IzhikevichParameters::low_threshold_spiking());
    }
}
