// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Weighted directed edges between cells

use core::fmt;

/// Position of a cell in the network (neurons first, then muscle cells)
pub type CellIndex = usize;

/// Synaptic conductance carried by an edge
pub type Conductance = f32;

/// A directed synapse of conductance `weight` from `source` to `target`
///
/// Several edges may join the same ordered pair; their weights add up when
/// the connectivity matrix is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: CellIndex,
    pub target: CellIndex,
    pub weight: Conductance,
}

impl Edge {
    pub fn new(source: CellIndex, target: CellIndex, weight: Conductance) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Largest index this edge touches
    #[inline]
    pub fn max_index(&self) -> CellIndex {
        self.source.max(self.target)
    }
}

impl From<(CellIndex, CellIndex, Conductance)> for Edge {
    fn from((source, target, weight): (CellIndex, CellIndex, Conductance)) -> Self {
        Self::new(source, target, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_from_tuple() {
        let edge: Edge = (3, 1, 2.5).into();
        assert_eq!(edge.source, 3);
        assert_eq!(edge.target, 1);
        assert_eq!(edge.weight, 2.5);
        assert_eq!(edge.max_index(), 3);
    }
}
