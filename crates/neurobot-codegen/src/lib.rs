// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # Neurobot Codegen
//!
//! Turns a compiled [`CpgNetwork`](neurobot_cpg::CpgNetwork) into C source for
//! static initialization by the embedded runtime (`libneurobot.h`).
//!
//! ## Output
//! - `N_CELLS` macro
//! - uniform initial state table
//! - one `struct params` constant per cell type in use
//! - per-cell pointer table into those constants
//! - sparse `G[target][source]` initializer, row-major, zeros omitted
//!
//! ## Usage
//! ```ignore
//! use neurobot_codegen::{dump_source_to_path, NetworkSummary};
//!
//! dump_source_to_path(&network, "cpg.c")?;
//! println!("{}", NetworkSummary::from_network(&network).to_json()?);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use neurobot_neural::CpgError;
use thiserror::Error;

mod emitter;
mod summary;

pub use emitter::{dump_source, dump_source_to_path, render_source, STDOUT_PATH};
pub use summary::NetworkSummary;

/// Source emission errors
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid network: {0}")]
    Network(#[from] CpgError),

    #[error("Non-finite value {value} in {location}")]
    NonFinite { location: String, value: f32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EmitError>;
