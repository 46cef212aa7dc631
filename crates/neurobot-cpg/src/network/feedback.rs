// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Proprioceptive feedback.

The only time-varying input of a CPG. One position per muscle joint comes in;
a current for every neuron goes out. Only the first cell of a module (every
third neuron) receives anything.

```text
roll(x, s)[k] = x[(k - s) mod K]

ascending:  err = 1 - roll(pos, +1) + roll(pos, -1)
descending: err = 1 - roll(pos, -1) + roll(pos, +1)
current     = -gain * err
```
*/

use crate::connectivity::MODULE_SIZE;
use neurobot_neural::{CpgError, Result};
use serde::{Deserialize, Serialize};

/// Feedback strategy chosen when a network is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum FeedbackPolicy {
    /// Open loop: every neuron gets zero current
    #[default]
    None,
    /// Ascending error into the first cell of every module
    SingleSided { gain: f32 },
    /// Ascending error into the first half of the modules, descending error
    /// into the second half
    ///
    /// The ascending half is driven by the same rolled error as `SingleSided`;
    /// it is never left without input.
    DoubleSided { gain: f32 },
}

impl FeedbackPolicy {
    pub fn is_closed_loop(&self) -> bool {
        !matches!(self, FeedbackPolicy::None)
    }

    /// Make sure the targeted neurons line up one-to-one with the muscles
    pub fn validate_for(&self, n_neurons: usize, n_muscles: usize) -> Result<()> {
        let blocks: Vec<usize> = match self {
            FeedbackPolicy::None => return Ok(()),
            FeedbackPolicy::SingleSided { .. } => vec![targets_in(0, n_neurons)],
            FeedbackPolicy::DoubleSided { .. } => {
                let half = n_neurons / 2;
                vec![targets_in(0, half), targets_in(half, n_neurons)]
            }
        };
        if let Some(count) = blocks.into_iter().find(|&count| count != n_muscles) {
            return Err(CpgError::ConfigurationMismatch(format!(
                "feedback targets {} neurons per block but the network has {} muscles",
                count, n_muscles
            )));
        }
        Ok(())
    }

    /// Current injected into each of the `n_neurons` neurons
    pub fn current(&self, pos: &[f32], n_neurons: usize) -> Result<Vec<f32>> {
        let mut current = vec![0.0; n_neurons];
        match *self {
            FeedbackPolicy::None => {}
            FeedbackPolicy::SingleSided { gain } => {
                inject(&mut current, 0, n_neurons, &ascending_error(pos), gain)?;
            }
            FeedbackPolicy::DoubleSided { gain } => {
                let half = n_neurons / 2;
                inject(&mut current, 0, half, &ascending_error(pos), gain)?;
                inject(&mut current, half, n_neurons, &descending_error(pos), gain)?;
            }
        }
        Ok(current)
    }
}

/// `x[(k - shift) mod K]` for every `k`
fn roll(values: &[f32], shift: isize) -> Vec<f32> {
    let len = values.len() as isize;
    (0..len)
        .map(|k| values[(k - shift).rem_euclid(len) as usize])
        .collect()
}

fn ascending_error(pos: &[f32]) -> Vec<f32> {
    signed_error(pos, 1)
}

fn descending_error(pos: &[f32]) -> Vec<f32> {
    signed_error(pos, -1)
}

fn signed_error(pos: &[f32], shift: isize) -> Vec<f32> {
    let behind = roll(pos, shift);
    let ahead = roll(pos, -shift);
    behind
        .iter()
        .zip(&ahead)
        .map(|(b, a)| 1.0 - b + a)
        .collect()
}

fn targets_in(start: usize, end: usize) -> usize {
    (start..end).step_by(MODULE_SIZE).count()
}

/// Write `-gain * err` into every third neuron of `start..end`
fn inject(current: &mut [f32], start: usize, end: usize, err: &[f32], gain: f32) -> Result<()> {
    let expected = targets_in(start, end);
    if err.len() != expected {
        return Err(CpgError::InvalidFeedback {
            expected,
            actual: err.len(),
        });
    }
    for (cell, e) in (start..end).step_by(MODULE_SIZE).zip(err) {
        current[cell] = -gain * e;
    }
    Ok(())
}
