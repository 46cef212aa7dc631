// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Fixed CPG topologies.

A topology is pure data: where the modules sit, which modules form rings,
and which oscillator cells drive which muscle cell. Edge generation is
shared by every topology.

```text
Single: modules 0 3 6 9               ring 0 -> 3 -> 6 -> 9 -> 0
        muscles 12..16 <- cells 1 4 7 10

Double: modules 0 3 .. 21             rings 0 -> 3 -> 6 -> 9 -> 0
                                            21 -> 18 -> 15 -> 12 -> 21
        muscles 24..28 <- cells (1,13) (4,16) (7,19) (10,22)
```
*/

use crate::connectivity::{module, module_loop, MODULE_SIZE};
use crate::network::gains::CpgGains;
use neurobot_neural::{CellIndex, CpgError, Edge, Result};
use serde::{Deserialize, Serialize};

/// How muscle potentials become actuator commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationPolicy {
    /// Antagonist difference clamped to `[-1, 1]`
    Clamped,
    /// Antagonist difference as is
    Raw,
}

impl ActivationPolicy {
    pub fn apply(self, value: f32) -> f32 {
        match self {
            ActivationPolicy::Clamped => value.clamp(-1.0, 1.0),
            ActivationPolicy::Raw => value,
        }
    }
}

/// Available network shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Four modules on one ring, 16 cells
    Single,
    /// Eight modules on two counter-rotating rings, 28 cells
    Double,
}

impl Topology {
    pub fn layout(self) -> TopologyLayout {
        match self {
            Topology::Single => TopologyLayout {
                module_bases: vec![0, 3, 6, 9],
                loops: vec![vec![0, 3, 6, 9]],
                muscle_drives: vec![(1, 12), (4, 13), (7, 14), (10, 15)],
                n_neurons: 12,
                n_cells: 16,
                activation: ActivationPolicy::Clamped,
            },
            Topology::Double => TopologyLayout {
                module_bases: (0..8).map(|m| m * MODULE_SIZE).collect(),
                loops: vec![vec![0, 3, 6, 9], vec![21, 18, 15, 12]],
                muscle_drives: vec![
                    (1, 24),
                    (13, 24),
                    (4, 25),
                    (16, 25),
                    (7, 26),
                    (19, 26),
                    (10, 27),
                    (22, 27),
                ],
                n_neurons: 24,
                n_cells: 28,
                activation: ActivationPolicy::Raw,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Topology::Single => "single",
            Topology::Double => "double",
        }
    }
}

/// Module placement, ring wiring and muscle drives of one topology
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyLayout {
    pub module_bases: Vec<CellIndex>,
    pub loops: Vec<Vec<CellIndex>>,
    /// `(oscillator cell, muscle cell)` pairs
    pub muscle_drives: Vec<(CellIndex, CellIndex)>,
    pub n_neurons: usize,
    pub n_cells: usize,
    pub activation: ActivationPolicy,
}

impl TopologyLayout {
    pub fn n_muscles(&self) -> usize {
        self.n_cells.saturating_sub(self.n_neurons)
    }

    /// Check that every referenced index fits the declared partition
    pub fn validate(&self) -> Result<()> {
        if self.n_neurons > self.n_cells {
            return Err(CpgError::ConfigurationMismatch(format!(
                "{} neurons declared but only {} cells",
                self.n_neurons, self.n_cells
            )));
        }
        if let Some(base) = self
            .module_bases
            .iter()
            .find(|&&base| base + MODULE_SIZE > self.n_neurons)
        {
            return Err(CpgError::ConfigurationMismatch(format!(
                "module at {} does not fit in {} neurons",
                base, self.n_neurons
            )));
        }
        if let Some(base) = self
            .loops
            .iter()
            .flatten()
            .find(|base| !self.module_bases.contains(base))
        {
            return Err(CpgError::ConfigurationMismatch(format!(
                "loop references {} which is not a module base",
                base
            )));
        }
        if let Some((source, muscle)) = self.muscle_drives.iter().find(|(source, muscle)| {
            *source >= self.n_neurons || *muscle < self.n_neurons || *muscle >= self.n_cells
        }) {
            return Err(CpgError::ConfigurationMismatch(format!(
                "muscle drive {} -> {} is outside the neuron/muscle partition {}/{}",
                source, muscle, self.n_neurons, self.n_cells
            )));
        }
        Ok(())
    }

    /// Every edge of the network, modules first, then rings, then muscles
    pub fn edges(&self, gains: &CpgGains) -> Vec<Edge> {
        let mut edges = Vec::new();
        for &base in &self.module_bases {
            edges.extend(module(base, gains.gexc, gains.ginh, gains.gslow));
        }
        for ring in &self.loops {
            edges.extend(module_loop(ring, gains.gfb, gains.gffw));
        }
        // Excitatory connections to muscle cells.
        edges.extend(
            self.muscle_drives
                .iter()
                .map(|&(source, muscle)| Edge::new(source, muscle, gains.gmusc)),
        );
        edges
    }

    /// Excitatory flag per neuron: `[exc, exc, inh]` for every module
    pub fn is_excitatory(&self) -> Vec<bool> {
        (0..self.n_neurons)
            .map(|cell| cell % MODULE_SIZE != MODULE_SIZE - 1)
            .collect()
    }
}
