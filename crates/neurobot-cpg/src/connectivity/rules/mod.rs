// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Wiring rules for CPG topologies.

Implements the two motifs every topology is assembled from:
- Oscillator: three-cell half-center module with a kill-switch
- Ring: feed-forward / feedback loop across modules
*/

mod oscillator;
mod ring;

pub use oscillator::{module, MODULE_SIZE};
pub use ring::module_loop;
