// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Per-cell parameter vectors (System-of-Arrays)
//!
//! Simulators consume parameters one column at a time (`a` for every cell,
//! then `b`, ...), so the resolved presets are stored transposed.

use super::IzhikevichParameters;

/// One vector per Izhikevich parameter, each indexed by cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellParameterArrays {
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    pub c: Vec<f32>,
    pub d: Vec<f32>,
    pub capacitance: Vec<f32>,
    pub k: Vec<f32>,
    pub vr: Vec<f32>,
    pub vt: Vec<f32>,
    pub vp: Vec<f32>,
    pub vn: Vec<f32>,
    pub tau: Vec<f32>,
}

impl CellParameterArrays {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            a: Vec::with_capacity(capacity),
            b: Vec::with_capacity(capacity),
            c: Vec::with_capacity(capacity),
            d: Vec::with_capacity(capacity),
            capacitance: Vec::with_capacity(capacity),
            k: Vec::with_capacity(capacity),
            vr: Vec::with_capacity(capacity),
            vt: Vec::with_capacity(capacity),
            vp: Vec::with_capacity(capacity),
            vn: Vec::with_capacity(capacity),
            tau: Vec::with_capacity(capacity),
        }
    }

    /// Append one cell; all eleven values come from the same preset
    pub fn push(&mut self, params: &IzhikevichParameters) {
        self.a.push(params.a);
        self.b.push(params.b);
        self.c.push(params.c);
        self.d.push(params.d);
        self.capacitance.push(params.capacitance);
        self.k.push(params.k);
        self.vr.push(params.vr);
        self.vt.push(params.vt);
        self.vp.push(params.vp);
        self.vn.push(params.vn);
        self.tau.push(params.tau);
    }

    /// Reassemble the parameter set of one cell
    pub fn get(&self, cell: usize) -> Option<IzhikevichParameters> {
        if cell >= self.len() {
            return None;
        }
        Some(IzhikevichParameters {
            a: self.a[cell],
            b: self.b[cell],
            c: self.c[cell],
            d: self.d[cell],
            capacitance: self.capacitance[cell],
            k: self.k[cell],
            vr: self.vr[cell],
            vt: self.vt[cell],
            vp: self.vp[cell],
            vn: self.vn[cell],
            tau: self.tau[cell],
        })
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

impl<'a> FromIterator<&'a IzhikevichParameters> for CellParameterArrays {
    fn from_iter<I: IntoIterator<Item = &'a IzhikevichParameters>>(iter: I) -> Self {
        let mut arrays = CellParameterArrays::default();
        for params in iter {
            arrays.push(params);
        }
        arrays
    }
}
