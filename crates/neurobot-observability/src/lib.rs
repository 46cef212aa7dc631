// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # neurobot-observability
//!
//! Logging setup shared by the Neurobot tools, with per-crate debug flags.
//!
//! ## Features
//! - `file-logging`: additional log file in a timestamped run folder

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known Neurobot crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "neurobot",
    "neurobot-neural",
    "neurobot-cpg",
    "neurobot-codegen",
    "neurobot-config",
    "neurobot-observability",
];
