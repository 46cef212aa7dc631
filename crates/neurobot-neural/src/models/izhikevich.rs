// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! # Izhikevich Cell Parameters
//!
//! ```text
//! C dV/dt = k (V - Vr)(V - Vt) - u + I_syn + I_in
//!   du/dt = a (b (V - Vr) - u)
//! if V >= Vp:  V <- c,  u <- u + d
//! ```
//!
//! `Vn` is the synaptic reversal potential of the presynaptic cell and `tau`
//! the time constant of its synaptic current.

use super::ModelParameters;
use serde::{Deserialize, Serialize};

/// One complete parameter set for a cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IzhikevichParameters {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    /// Membrane capacitance
    #[serde(rename = "C", alias = "capacitance")]
    pub capacitance: f32,
    pub k: f32,
    pub vr: f32,
    pub vt: f32,
    pub vp: f32,
    pub vn: f32,
    pub tau: f32,
}

impl IzhikevichParameters {
    /// Build from the canonical `(a, b, c, d, C, k, Vr, Vt, Vp, Vn, tau)` order
    pub fn from_tuple(values: [f32; 11]) -> Self {
        let [a, b, c, d, capacitance, k, vr, vt, vp, vn, tau] = values;
        Self {
            a,
            b,
            c,
            d,
            capacitance,
            k,
            vr,
            vt,
            vp,
            vn,
            tau,
        }
    }

    /// Values in canonical `(a, b, c, d, C, k, Vr, Vt, Vp, Vn, tau)` order
    pub fn to_tuple(&self) -> [f32; 11] {
        [
            self.a,
            self.b,
            self.c,
            self.d,
            self.capacitance,
            self.k,
            self.vr,
            self.vt,
            self.vp,
            self.vn,
            self.tau,
        ]
    }

    /// Regular-spiking excitatory cell
    pub fn regular_spiking() -> Self {
        Self::from_tuple([0.03, -2.0, -50.0, 100.0, 100.0, 0.7, -60.0, -40.0, 25.0, 0.0, 5.0])
    }

    /// Low-threshold-spiking inhibitory cell
    pub fn low_threshold_spiking() -> Self {
        Self::from_tuple([0.03, 8.0, -53.0, 20.0, 100.0, 1.0, -56.0, -42.0, 25.0, -70.0, 20.0])
    }
}

impl ModelParameters for IzhikevichParameters {
    fn validate(&self) -> Result<(), &'static str> {
        if self.to_tuple().iter().any(|v| !v.is_finite()) {
            return Err("Izhikevich: all parameters must be finite");
        }
        if self.capacitance <= 0.0 {
            return Err("Izhikevich: capacitance C must be positive");
        }
        if self.tau <= 0.0 {
            return Err("Izhikevich: synaptic time constant tau must be positive");
        }
        Ok(())
    }
}
