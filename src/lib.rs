// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # Neurobot - Central Pattern Generator Compiler
//!
//! Compiles small spiking oscillator networks (central pattern generators)
//! into static C tables for the embedded neurobot runtime.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! neurobot = "0.1"
//! ```
//!
//! ```rust,no_run
//! use neurobot::prelude::*;
//!
//! let config = NeurobotConfig::default();
//! let network = neurobot::build_network(&config, Variant::SingleFeedback).unwrap();
//!
//! let source = render_source(&network).unwrap();
//! assert!(source.starts_with("#include \"libneurobot.h\""));
//! ```
//!
//! ## Components
//! - **`neural`**: cell types, Izhikevich presets, errors, dynamics interface
//! - **`cpg`**: graph builder, cell-type resolver, network descriptor
//! - **`codegen`**: C source emitter and network summary
//! - **`config`**: `neurobot.toml` loading with env/CLI overrides
//! - **`observability`**: logging setup and per-crate debug flags
//!
//! The `cpg-compile` binary wires all of them together.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use neurobot_codegen as codegen;
pub use neurobot_config as config;
pub use neurobot_cpg as cpg;
pub use neurobot_neural as neural;
pub use neurobot_observability as observability;

use neurobot_config::NeurobotConfig;
use neurobot_cpg::{CpgNetwork, Variant};
use tracing::info;

/// Compile `variant` with the gains, feedback gains and presets of `config`
pub fn build_network(config: &NeurobotConfig, variant: Variant) -> neural::Result<CpgNetwork> {
    info!(variant = %variant, "Building CPG network");
    CpgNetwork::for_variant(
        variant,
        &config.gains_for(variant),
        &config.feedback,
        &config.presets,
    )
}

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::build_network;

    pub use neurobot_neural::{
        CellDynamics, CellType, CpgError, Edge, IzhikevichParameters, NetworkParameters,
        PresetTable,
    };

    pub use neurobot_cpg::{
        connectivity, module, module_loop, resolve_cell_types, ActivationPolicy, CpgController,
        CpgGains, CpgNetwork, FeedbackGains, FeedbackPolicy, Topology, Variant,
    };

    pub use neurobot_codegen::{dump_source, dump_source_to_path, render_source, NetworkSummary};

    pub use neurobot_config::{load_config, validate_config, NeurobotConfig};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_uses_configured_gains() {
        let mut config = NeurobotConfig::default();
        config.gains.double.gexc = 500.0;

        let network = build_network(&config, Variant::Double).unwrap();
        assert_eq!(network.connectivity()[[1, 0]], 500.0);

        let network = build_network(&config, Variant::Single).unwrap();
        assert_eq!(network.connectivity()[[1, 0]], 20.0);
    }
}
