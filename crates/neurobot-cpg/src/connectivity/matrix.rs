// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Dense connectivity matrix.

`G[[i, j]]` holds the total conductance from cell `j` onto cell `i`
(row = target, column = source). Repeated edges between the same ordered
pair accumulate.
*/

use ndarray::Array2;
use neurobot_neural::{CellIndex, CpgError, Edge, Result};
use tracing::{debug, warn};

/// Build the `n_cells` x `n_cells` matrix from `edges`
///
/// Fails with [`CpgError::InvalidIndex`] if any edge reaches outside
/// `0..n_cells`; nothing is clamped or dropped.
pub fn connectivity(edges: &[Edge], n_cells: usize) -> Result<Array2<f32>> {
    if let Some(edge) = edges.iter().find(|e| e.max_index() >= n_cells) {
        return Err(CpgError::InvalidIndex {
            from: edge.source,
            to: edge.target,
            n_cells,
        });
    }

    let mut matrix = Array2::<f32>::zeros((n_cells, n_cells));
    for edge in edges {
        matrix[[edge.target, edge.source]] += edge.weight;
    }

    debug!(n_cells, n_edges = edges.len(), "Built connectivity matrix");
    Ok(matrix)
}

/// Build the matrix with `N = 1 + max index`
///
/// Trailing cells that no edge mentions are silently left out, which makes
/// this unsuitable for networks with disconnected muscle cells. Prefer
/// [`connectivity`] with an explicit count.
pub fn connectivity_inferred(edges: &[Edge]) -> Result<Array2<f32>> {
    let n_cells = edges
        .iter()
        .map(Edge::max_index)
        .max()
        .map(|max: CellIndex| max + 1)
        .ok_or(CpgError::EmptyEdgeList)?;

    warn!(n_cells, "Inferring cell count from edges; trailing unconnected cells are dropped");
    connectivity(edges, n_cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_is_target() {
        let matrix = connectivity(&[Edge::new(0, 1, 5.0)], 2).unwrap();
        assert_eq!(matrix[[1, 0]], 5.0);
        assert_eq!(matrix[[0, 1]], 0.0);
    }

    #[test]
    fn test_repeated_edges_accumulate() {
        let edges = [Edge::new(0, 1, 5.0), Edge::new(0, 1, 3.0)];
        let matrix = connectivity(&edges, 2).unwrap();
        assert_eq!(matrix[[1, 0]], 8.0);
    }

    #[test]
    fn test_out_of_range_edge_rejected() {
        let result = connectivity(&[Edge::new(0, 16, 1.0)], 16);
        assert_eq!(
            result,
            Err(CpgError::InvalidIndex {
                from: 0,
                to: 16,
                n_cells: 16
            })
        );
    }

    #[test]
    fn test_inferred_size() {
        let edges = [Edge::new(3, 1, 1.0), Edge::new(0, 2, 1.0)];
        let matrix = connectivity_inferred(&edges).unwrap();
        assert_eq!(matrix.dim(), (4, 4));
        assert_eq!(matrix[[1, 3]], 1.0);
    }

    #[test]
    fn test_inferred_empty() {
        assert_eq!(connectivity_inferred(&[]), Err(CpgError::EmptyEdgeList));
    }

    #[test]
    fn test_inferred_truncates_trailing_cells() {
        // A muscle cell at index 5 with no edges is invisible to inference
        let matrix = connectivity_inferred(&[Edge::new(1, 4, 1.0)]).unwrap();
        assert_eq!(matrix.dim(), (5, 5));
    }
}
