// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Connectivity generation.

Rules emit plain edge lists; the matrix builder folds them into a dense
conductance matrix. Nothing here keeps state.
*/

pub mod matrix;
pub mod rules;

pub use matrix::{connectivity, connectivity_inferred};
pub use rules::{module, module_loop, MODULE_SIZE};
