// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Dynamics collaborator interface
//!
//! The compiler describes a network; something else integrates it. This
//! trait is the seam between the two. A desktop simulator, a test fixture or
//! a hardware-in-the-loop bridge can all sit behind it.
//!
//! ```ignore
//! struct MySimulator { v: Vec<f32>, fired: Vec<bool>, /* ... */ }
//!
//! impl CellDynamics for MySimulator {
//!     fn from_network(network: NetworkParameters<'_>) -> Result<Self> { /* ... */ }
//!     fn potentials(&self) -> &[f32] { &self.v }
//!     fn fired_mut(&mut self) -> &mut [bool] { &mut self.fired }
//!     fn step(&mut self, dt: f32, input_current: &[f32]) { /* integrate */ }
//! }
//! ```

use crate::models::CellParameterArrays;
use crate::types::Result;
use ndarray::Array2;

/// Everything a simulator needs to instantiate a compiled network
///
/// `connectivity[[i, j]]` is the conductance from cell `j` onto cell `i`.
#[derive(Debug, Clone, Copy)]
pub struct NetworkParameters<'a> {
    pub connectivity: &'a Array2<f32>,
    pub cells: &'a CellParameterArrays,
    pub n_cells: usize,
}

/// Time-varying state of a network, owned outside the compiler
pub trait CellDynamics {
    /// Instantiate from a compiled network
    fn from_network(network: NetworkParameters<'_>) -> Result<Self>
    where
        Self: Sized;

    /// Membrane potential of every cell
    fn potentials(&self) -> &[f32];

    /// Per-cell "fired this step" flags
    fn fired_mut(&mut self) -> &mut [bool];

    /// Advance by `dt` with one input current per cell
    fn step(&mut self, dt: f32, input_current: &[f32]);
}
