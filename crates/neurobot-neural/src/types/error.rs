// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Error types for network construction
//!
//! Every failure here happens while a network is being compiled. None of them
//! is recoverable: a partially built matrix or parameter table is never
//! handed out.

use super::edge::CellIndex;

/// Errors raised while compiling a CPG network
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CpgError {
    /// Declared sizes disagree (flag count vs neuron count, layout vs cell count)
    #[error("Configuration mismatch: {0}")]
    ConfigurationMismatch(String),

    /// An edge points outside the explicit cell count
    #[error("Invalid index: edge {from} -> {to} is outside 0..{n_cells}")]
    InvalidIndex {
        from: CellIndex,
        to: CellIndex,
        n_cells: usize,
    },

    /// A cell needs a parameter preset the table does not define
    #[error("Unresolvable cell type: no preset named '{0}'")]
    UnresolvableCellType(String),

    /// The cell count cannot be inferred without any edge
    #[error("Cannot infer the cell count from an empty edge list")]
    EmptyEdgeList,

    /// Proprioceptive input does not match the muscle layout
    #[error("Invalid feedback input: expected {expected} positions, got {actual}")]
    InvalidFeedback { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, CpgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CpgError::InvalidIndex {
            from: 2,
            to: 16,
            n_cells: 16,
        };
        assert_eq!(err.to_string(), "Invalid index: edge 2 -> 16 is outside 0..16");

        let err = CpgError::UnresolvableCellType("fs".to_string());
        assert!(err.to_string().contains("'fs'"));
    }
}
