// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Gain constants
//!
//! Topologies share all of their wiring code; only these numbers differ
//! between the shipped presets.

use serde::{Deserialize, Serialize};

/// Synaptic gains of a CPG topology
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpgGains {
    /// Mutual excitation inside a module
    pub gexc: f32,
    /// Kill-switch inhibition onto both oscillator cells
    pub ginh: f32,
    /// Feed-forward edge to the next module in a loop
    pub gffw: f32,
    /// Feedback edge onto the previous module's kill-switch
    pub gfb: f32,
    /// Slow excitation of the kill-switch
    pub gslow: f32,
    /// Oscillator to muscle drive
    pub gmusc: f32,
}

impl CpgGains {
    /// Single-ring defaults
    pub fn single_default() -> Self {
        Self {
            gexc: 20.0,
            ginh: 40.0,
            gffw: 10.0,
            gfb: 8.0,
            gslow: 3.0,
            gmusc: 1.0,
        }
    }

    /// Single-ring gains of the forward-only controller (stronger kill-switch)
    pub fn forwards() -> Self {
        Self {
            ginh: 60.0,
            ..Self::single_default()
        }
    }

    /// Double-ring defaults (signed inhibition, large conductances)
    pub fn double_default() -> Self {
        Self {
            gexc: 1000.0,
            ginh: -1000.0,
            gffw: 400.0,
            gfb: 400.0,
            gslow: 100.0,
            gmusc: 40.0,
        }
    }

    /// Double-ring gains of the reversing controller
    pub fn double_backwards() -> Self {
        Self::single_default()
    }

    /// Look up a named gain preset
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::single_default()),
            "forwards" => Some(Self::forwards()),
            "double" => Some(Self::double_default()),
            "double-backwards" | "backwards" => Some(Self::double_backwards()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> [(&'static str, f32); 6] {
        [
            ("gexc", self.gexc),
            ("ginh", self.ginh),
            ("gffw", self.gffw),
            ("gfb", self.gfb),
            ("gslow", self.gslow),
            ("gmusc", self.gmusc),
        ]
    }
}

impl Default for CpgGains {
    fn default() -> Self {
        Self::single_default()
    }
}

/// Proprioceptive feedback strengths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackGains {
    /// Gain of the single-ring feedback pathway
    pub single_sided_gain: f32,
    /// Gain of both double-ring feedback pathways
    pub double_sided_gain: f32,
}

impl Default for FeedbackGains {
    fn default() -> Self {
        Self {
            single_sided_gain: 25.0,
            double_sided_gain: 5.0,
        }
    }
}
