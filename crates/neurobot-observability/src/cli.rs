// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-neurobot-cpg`, `--debug-neurobot-codegen`, etc.
//! to raise one crate to debug level while everything else stays at the
//! default level.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Environment variable listing crates to debug
pub const DEBUG_ENV: &str = "NEUROBOT_DEBUG";

const FLAG_PREFIX: &str = "--debug-";

/// Parsed debug flags
///
/// # Example
/// ```rust
/// use neurobot_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(vec!["--debug-neurobot-cpg".to_string()]);
/// assert!(flags.is_enabled("neurobot-cpg"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Parse debug flags from command-line arguments
    ///
    /// Looks for arguments matching `--debug-{crate-name}` pattern.
    /// Also supports `--debug-all` to enable all crates.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::split_args(args).0
    }

    /// Separate debug flags from the remaining arguments
    ///
    /// The remaining arguments keep their order so they can be handed to
    /// a regular argument parser.
    pub fn split_args<I>(args: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();
        let mut rest = Vec::new();

        for arg in args {
            match arg.strip_prefix(FLAG_PREFIX) {
                Some("all") => flags.enable_all(),
                Some(crate_name) if !crate_name.is_empty() => flags.enable(crate_name),
                _ => rest.push(arg),
            }
        }

        (flags, rest)
    }

    /// Merge a `NEUROBOT_DEBUG`-style value: `all` or comma-separated crate names
    pub fn merge_env_value(&mut self, value: &str) {
        if value.trim() == "all" {
            self.enable_all();
            return;
        }
        for crate_name in value.split(',').map(str::trim) {
            if !crate_name.is_empty() {
                self.enable(crate_name);
            }
        }
    }

    pub fn enable(&mut self, crate_name: &str) {
        self.enabled_crates.insert(crate_name.to_string());
    }

    pub fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enable(crate_name);
        }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// Get log level for a crate
    ///
    /// Returns `tracing::Level::DEBUG` if enabled, `tracing::Level::INFO` otherwise.
    pub fn log_level(&self, crate_name: &str) -> tracing::Level {
        if self.is_enabled(crate_name) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Create a tracing filter from debug flags
    ///
    /// Returns a filter string for `EnvFilter`, e.g.
    /// `"neurobot_cpg=debug,warn"`. Tracing targets are module paths, so
    /// crate names are written with underscores.
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|crate_name| format!("{}=debug", crate_name.replace('-', "_")))
            .collect();
        filters.push(default_level.to_string());
        filters.join(",")
    }
}

/// Parse debug flags from the process arguments and `NEUROBOT_DEBUG`
///
/// Returns the flags and the arguments that were not debug flags.
pub fn parse_debug_flags() -> (CrateDebugFlags, Vec<String>) {
    let (mut flags, rest) = CrateDebugFlags::split_args(env::args());
    if let Ok(value) = env::var(DEBUG_ENV) {
        flags.merge_env_value(&value);
    }
    (flags, rest)
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}          Enable debug logging for specific crate

Available crates:
  {}

Environment Variable:
  {env}={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  {env}=all                               Enable debug for all crates
"#,
        KNOWN_CRATES.join(", "),
        env = DEBUG_ENV
    )
}
