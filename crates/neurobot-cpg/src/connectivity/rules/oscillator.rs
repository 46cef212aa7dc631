// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Oscillator module - the three-cell motif every CPG is built from.

```text
        Gexc
   i  <------>  i+1
   ^ \          / ^
   |  \ Gslow  /  |
 Ginh  v      v  Ginh
   |     i+2      |
   +------+-------+
```

Cells `i` and `i+1` excite each other (a half-center oscillator). Both
slowly charge the kill-switch `i+2`, which inhibits them back once it fires.
*/

use neurobot_neural::{CellIndex, Conductance, Edge};

/// Number of cells occupied by one module
pub const MODULE_SIZE: usize = 3;

/// Edges of the oscillator module based at `i`
///
/// Always six edges, touching only `i`, `i+1` and `i+2`.
pub fn module(i: CellIndex, gexc: Conductance, ginh: Conductance, gslow: Conductance) -> Vec<Edge> {
    vec![
        // Mutually excitatory loop.
        Edge::new(i, i + 1, gexc),
        Edge::new(i + 1, i, gexc),
        // Kill switch.
        Edge::new(i + 2, i, ginh),
        Edge::new(i + 2, i + 1, ginh),
        // Lower the kill switch threshold while the module stays active.
        Edge::new(i, i + 2, gslow),
        Edge::new(i + 1, i + 2, gslow),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_edges() {
        let edges = module(6, 20.0, 40.0, 3.0);
        assert_eq!(edges.len(), 6);

        let excitatory: Vec<_> = edges.iter().filter(|e| e.weight == 20.0).collect();
        assert_eq!(excitatory.len(), 2);
        assert!(excitatory.contains(&&Edge::new(6, 7, 20.0)));
        assert!(excitatory.contains(&&Edge::new(7, 6, 20.0)));

        let inhibitory: Vec<_> = edges.iter().filter(|e| e.weight == 40.0).collect();
        assert!(inhibitory.iter().all(|e| e.source == 8));
        assert_eq!(inhibitory.iter().map(|e| e.target).collect::<Vec<_>>(), vec![6, 7]);

        let slow: Vec<_> = edges.iter().filter(|e| e.weight == 3.0).collect();
        assert!(slow.iter().all(|e| e.target == 8));
    }

    #[test]
    fn test_module_never_self_connects() {
        assert!(module(0, 1.0, 1.0, 1.0).iter().all(|e| e.source != e.target));
    }
}
