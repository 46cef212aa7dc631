// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # Neurobot CPG
//!
//! Compiles central pattern generators: rings of three-cell oscillator modules
//! driving a small set of muscle cells.
//!
//! ## Pipeline
//!
//! 1. **Graph builder** (`connectivity`): per-module and per-ring edge lists,
//!    folded into a dense `Array2<f32>` with `G[[target, source]]`
//! 2. **Cell-type resolver** (`cell_types`): excitatory flags to presets
//! 3. **Network descriptor** (`network`): the immutable compiled artifact,
//!    plus proprioceptive feedback and muscle activation readout
//!
//! ```ignore
//! use neurobot_cpg::{CpgNetwork, Variant, FeedbackGains};
//!
//! let variant = Variant::SingleFeedback;
//! let network = CpgNetwork::for_variant(
//!     variant,
//!     &variant.default_gains(),
//!     &FeedbackGains::default(),
//!     &PresetTable::default(),
//! )?;
//! assert_eq!(network.n_cells(), 16);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cell_types;
pub mod connectivity;
pub mod network;

pub use cell_types::{resolve_cell_types, ResolvedCells};
pub use connectivity::{connectivity, connectivity_inferred, module, module_loop, MODULE_SIZE};
pub use network::{
    ActivationPolicy, CpgController, CpgGains, CpgNetwork, FeedbackGains, FeedbackPolicy,
    Topology, TopologyLayout, Variant, MUSCLE_CELL_TYPE,
};
