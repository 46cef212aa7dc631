// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # Neurobot Neural Types
//!
//! Everything the CPG compiler needs to know about cells, independent of how
//! the network is wired:
//! - **Types**: cell indices, weighted edges, the error taxonomy
//! - **Models**: Izhikevich parameter sets and the named preset table
//! - **Dynamics**: the interface an external simulator implements so a
//!   compiled network can be stepped in time
//!
//! The membrane integration itself lives outside this workspace. Only its
//! construction inputs and its observable state are described here.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cell_type;
pub mod dynamics;
pub mod models;
pub mod types;

pub use cell_type::CellType;
pub use dynamics::{CellDynamics, NetworkParameters};
pub use models::{CellParameterArrays, IzhikevichParameters, ModelParameters, PresetTable};
pub use types::{CellIndex, Conductance, CpgError, Edge, Result};
