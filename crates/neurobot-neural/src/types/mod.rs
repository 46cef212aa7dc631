// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # Core Types
//!
//! Identity, edge and error types shared by the graph builder, the network
//! descriptor and the source emitter.

pub mod edge;
pub mod error;

pub use edge::{CellIndex, Conductance, Edge};
pub use error::{CpgError, Result};
