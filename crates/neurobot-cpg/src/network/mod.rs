// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Network assembly: topologies, gains, feedback and the compiled descriptor

pub mod controller;
pub mod descriptor;
pub mod feedback;
pub mod gains;
pub mod topology;
pub mod variant;

pub use controller::CpgController;
pub use descriptor::{CpgNetwork, MUSCLE_CELL_TYPE};
pub use feedback::FeedbackPolicy;
pub use gains::{CpgGains, FeedbackGains};
pub use topology::{ActivationPolicy, Topology, TopologyLayout};
pub use variant::Variant;
