// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Runtime binding of a compiled network to a dynamics collaborator.

```text
positions ──> propriocept ──> input current (N) ──> D::step
                                                      │
muscle activations <── antagonist difference <── potentials
```
*/

use crate::network::descriptor::CpgNetwork;
use neurobot_neural::{CellDynamics, Result};
use tracing::{debug, trace};

/// A network together with the simulator state that drives it
#[derive(Debug)]
pub struct CpgController<D: CellDynamics> {
    network: CpgNetwork,
    dynamics: D,
}

impl<D: CellDynamics> CpgController<D> {
    /// Instantiate the collaborator and kick-start the ring
    pub fn new(network: CpgNetwork) -> Result<Self> {
        let dynamics = D::from_network(network.simulation_parameters())?;
        let mut controller = Self { network, dynamics };
        controller.start();
        Ok(controller)
    }

    /// Mark cell 0 as fired so the first module begins oscillating
    pub fn start(&mut self) {
        if let Some(first) = self.dynamics.fired_mut().first_mut() {
            *first = true;
        }
        debug!(n_cells = self.network.n_cells(), "CPG started");
    }

    /// Advance the collaborator by `dt` under the given joint positions
    pub fn step(&mut self, dt: f32, pos: &[f32]) -> Result<()> {
        let current = self.network.input_current(pos)?;
        trace!(dt, "CPG step");
        self.dynamics.step(dt, &current);
        Ok(())
    }

    pub fn muscle_activations(&self) -> Result<Vec<f32>> {
        self.network.muscle_activations(self.dynamics.potentials())
    }

    pub fn network(&self) -> &CpgNetwork {
        &self.network
    }

    pub fn dynamics(&self) -> &D {
        &self.dynamics
    }

    pub fn dynamics_mut(&mut self) -> &mut D {
        &mut self.dynamics
    }
}
