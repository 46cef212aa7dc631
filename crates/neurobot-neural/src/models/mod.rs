// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # Neuron Model Parameters
//!
//! Cells follow the Izhikevich quadratic integrate-and-fire model with a
//! second-order synaptic current. The compiler never integrates the model; it
//! only selects, validates and lays out the parameters.
//!
//! ## Parameter order
//!
//! ```text
//! (a, b, c, d, C, k, Vr, Vt, Vp, Vn, tau)
//! ```

pub mod arrays;
pub mod izhikevich;
pub mod presets;

pub use arrays::CellParameterArrays;
pub use izhikevich::IzhikevichParameters;
pub use presets::PresetTable;

/// Validation contract for a model's parameter set
pub trait ModelParameters: Clone + Send + Sync + 'static {
    /// `Ok(())` if every value is usable, `Err(message)` otherwise
    fn validate(&self) -> Result<(), &'static str>;
}
