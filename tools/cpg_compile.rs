// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! `cpg-compile` - compile a CPG variant into C source for the neurobot runtime.
//!
//! Exit status is 0 on success and 1 on any failure. Nothing is written when
//! configuration or network construction fails.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use neurobot::codegen::{dump_source_to_path, NetworkSummary, STDOUT_PATH};
use neurobot::config::{load_config, validate_config};
use neurobot::cpg::Variant;
use neurobot::observability::{debug_flags_help, parse_debug_flags, CrateDebugFlags};

/// Neurobot CPG compiler - emits connectivity and cell parameters as C source
#[derive(Parser, Debug)]
#[command(name = "cpg-compile", version, author, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Output C source file (`-` for stdout)
    output: PathBuf,

    /// Network variant: single, single-feedback, double, double-feedback
    #[arg(long, default_value = "single")]
    variant: Variant,

    /// Path to neurobot.toml (searched for when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Configuration override, e.g. `--set single.gexc=30` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,

    /// Print a JSON summary of the compiled network
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn main() -> ExitCode {
    let (debug_flags, argv) = parse_debug_flags();

    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(args, &debug_flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "cpg-compile failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, debug_flags: &CrateDebugFlags) -> Result<()> {
    let overrides: HashMap<String, String> = args.overrides.into_iter().collect();
    let config = load_config(args.config.as_deref(), Some(&overrides))
        .context("Failed to load configuration")?;

    let level = if args.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    #[cfg(feature = "file-logging")]
    let _logging = neurobot::observability::init_file_logging(debug_flags, level, None)?;
    #[cfg(not(feature = "file-logging"))]
    let _logging = neurobot::observability::init_logging(debug_flags, level)?;

    validate_config(&config)?;

    let network = neurobot::build_network(&config, args.variant)
        .with_context(|| format!("Failed to build {} network", args.variant))?;

    dump_source_to_path(&network, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.summary {
        let summary = NetworkSummary::from_network(&network).to_json()?;
        // Keep stdout clean when it carries the source itself
        if args.output.as_os_str() == STDOUT_PATH {
            eprintln!("{}", summary);
        } else {
            println!("{}", summary);
        }
    }

    Ok(())
}
