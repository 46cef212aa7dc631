// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Module loops - ring wiring between oscillator modules.

For modules `m_0 .. m_{K-1}` (in the given order):
- feed-forward: cell B of `m_k` excites cell A of `m_{k+1}`
- feedback: cell A of `m_k` excites the kill-switch of `m_{k-1}`

Indices wrap modulo `K`, so the chain closes into a ring.
*/

use neurobot_neural::{CellIndex, Conductance, Edge};

/// Ring edges over the modules based at `indices`
///
/// Returns `2K` edges: the `K` feed-forward edges first, then the `K`
/// feedback edges.
pub fn module_loop(indices: &[CellIndex], gfb: Conductance, gffw: Conductance) -> Vec<Edge> {
    let count = indices.len();
    let mut edges = Vec::with_capacity(2 * count);

    for (k, &base) in indices.iter().enumerate() {
        let next = indices[(k + 1) % count];
        edges.push(Edge::new(base + 1, next, gffw));
    }

    for (k, &base) in indices.iter().enumerate() {
        let previous = indices[(k + count - 1) % count];
        edges.push(Edge::new(base, previous + 2, gfb));
    }

    edges
}
