// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/*!
C source emitter.

The layout below is a fixed contract with the firmware build. Every line
ends in `\n`; blank lines are part of the contract.

```text
#include "libneurobot.h"

#define N_CELLS <N>

struct state states[N_CELLS] = {
  [0 ... N_CELLS-1] = {.v=-60, .u=0, .i=0, .j=0}
};

const struct params RS = {         one block per type in use,
  .a=.., .b=.., .c=.., .d=..,      in order of first use
  .C=.., .k=.., .tau=..,
  .vr=.., .vt=.., .vp=.., .vn=..
};


const struct params *params[N_CELLS] = {
  [i] = &RS,
};

const float G[N_CELLS][N_CELLS] = {
	[i][j] = w,                       nonzero only, row-major
};
```
*/

use crate::{EmitError, Result};
use neurobot_cpg::CpgNetwork;
use neurobot_neural::IzhikevichParameters;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Output path meaning "write to stdout"
pub const STDOUT_PATH: &str = "-";

/// Initial value of every cell's `struct state`
const INITIAL_STATE: &str = "{.v=-60, .u=0, .i=0, .j=0}";

/// Float in shortest round-trip form with a decimal point (`20.0`, `0.7`)
struct CFloat(f32);

impl fmt::Display for CFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Write the C source for `network` into `out`
///
/// Non-finite values are rejected before anything is written.
pub fn dump_source<W: Write>(network: &CpgNetwork, out: &mut W) -> Result<()> {
    check_finite(network)?;

    writeln!(out, "#include \"libneurobot.h\"\n")?;
    writeln!(out, "#define N_CELLS {}\n", network.n_cells())?;

    writeln!(out, "struct state states[N_CELLS] = {{")?;
    writeln!(out, "  [0 ... N_CELLS-1] = {}", INITIAL_STATE)?;
    writeln!(out, "}};\n")?;

    for (cell_type, params) in network.presets_in_use() {
        write_params_block(out, &cell_type.symbol(), &params)?;
    }

    writeln!(out, "\nconst struct params *params[N_CELLS] = {{")?;
    for (cell, cell_type) in network.cell_types().iter().enumerate() {
        writeln!(out, "  [{}] = &{},", cell, cell_type.symbol())?;
    }
    writeln!(out, "}};\n")?;

    writeln!(out, "const float G[N_CELLS][N_CELLS] = {{")?;
    let mut n_written = 0usize;
    for ((target, source), &weight) in network.connectivity().indexed_iter() {
        if weight != 0.0 {
            writeln!(out, "\t[{}][{}] = {},", target, source, CFloat(weight))?;
            n_written += 1;
        }
    }
    writeln!(out, "}};")?;

    debug!(
        n_cells = network.n_cells(),
        n_synapses = n_written,
        "Emitted C source"
    );
    Ok(())
}

/// Render the C source into a string
pub fn render_source(network: &CpgNetwork) -> Result<String> {
    let mut buffer = Vec::new();
    dump_source(network, &mut buffer)?;
    // Every emitted byte is ASCII
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the C source to `path`, or to stdout when `path` is `-`
///
/// The whole file is rendered before the destination is touched, so an
/// invalid network never leaves a partial file behind.
pub fn dump_source_to_path<P: AsRef<Path>>(network: &CpgNetwork, path: P) -> Result<()> {
    let path = path.as_ref();
    let source = render_source(network)?;

    if path == Path::new(STDOUT_PATH) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(source.as_bytes())?;
        handle.flush()?;
    } else {
        fs::write(path, source.as_bytes())?;
    }

    info!(
        path = %path.display(),
        bytes = source.len(),
        "Wrote C source"
    );
    Ok(())
}

fn write_params_block<W: Write>(
    out: &mut W,
    symbol: &str,
    p: &IzhikevichParameters,
) -> io::Result<()> {
    writeln!(out, "const struct params {} = {{", symbol)?;
    writeln!(
        out,
        "  .a={}, .b={}, .c={}, .d={},",
        CFloat(p.a),
        CFloat(p.b),
        CFloat(p.c),
        CFloat(p.d)
    )?;
    writeln!(
        out,
        "  .C={}, .k={}, .tau={},",
        CFloat(p.capacitance),
        CFloat(p.k),
        CFloat(p.tau)
    )?;
    writeln!(
        out,
        "  .vr={}, .vt={}, .vp={}, .vn={}",
        CFloat(p.vr),
        CFloat(p.vt),
        CFloat(p.vp),
        CFloat(p.vn)
    )?;
    writeln!(out, "}};\n")
}

/// `NaN` and `inf` are not C float literals
fn check_finite(network: &CpgNetwork) -> Result<()> {
    for (cell_type, params) in network.presets_in_use() {
        if let Some(value) = params.to_tuple().into_iter().find(|v| !v.is_finite()) {
            return Err(EmitError::NonFinite {
                location: format!("preset {}", cell_type.symbol()),
                value,
            });
        }
    }
    if let Some(((target, source), &value)) = network
        .connectivity()
        .indexed_iter()
        .find(|(_, w)| !w.is_finite())
    {
        return Err(EmitError::NonFinite {
            location: format!("G[{}][{}]", target, source),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurobot_cpg::{connectivity, ActivationPolicy, FeedbackPolicy};
    use neurobot_neural::{Edge, PresetTable};

    fn two_cell_network(weights: [(usize, usize, f32); 2]) -> CpgNetwork {
        let edges: Vec<Edge> = weights.iter().map(|&e| Edge::from(e)).collect();
        CpgNetwork::from_parts(
            connectivity(&edges, 2).unwrap(),
            &[true, false],
            2,
            &PresetTable::default(),
            ActivationPolicy::Raw,
            FeedbackPolicy::None,
        )
        .unwrap()
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(CFloat(20.0).to_string(), "20.0");
        assert_eq!(CFloat(0.7).to_string(), "0.7");
        assert_eq!(CFloat(-1000.0).to_string(), "-1000.0");
        assert_eq!(CFloat(0.03).to_string(), "0.03");
    }

    #[test]
    fn test_two_cell_layout() {
        let network = two_cell_network([(0, 1, 5.0), (1, 0, 3.0)]);
        let expected = concat!(
            "#include \"libneurobot.h\"\n",
            "\n",
            "#define N_CELLS 2\n",
            "\n",
            "struct state states[N_CELLS] = {\n",
            "  [0 ... N_CELLS-1] = {.v=-60, .u=0, .i=0, .j=0}\n",
            "};\n",
            "\n",
            "const struct params RS = {\n",
            "  .a=0.03, .b=-2.0, .c=-50.0, .d=100.0,\n",
            "  .C=100.0, .k=0.7, .tau=5.0,\n",
            "  .vr=-60.0, .vt=-40.0, .vp=25.0, .vn=0.0\n",
            "};\n",
            "\n",
            "const struct params LTS = {\n",
            "  .a=0.03, .b=8.0, .c=-53.0, .d=20.0,\n",
            "  .C=100.0, .k=1.0, .tau=20.0,\n",
            "  .vr=-56.0, .vt=-42.0, .vp=25.0, .vn=-70.0\n",
            "};\n",
            "\n",
            "\n",
            "const struct params *params[N_CELLS] = {\n",
            "  [0] = &RS,\n",
            "  [1] = &LTS,\n",
            "};\n",
            "\n",
            "const float G[N_CELLS][N_CELLS] = {\n",
            "\t[0][1] = 3.0,\n",
            "\t[1][0] = 5.0,\n",
            "};\n",
        );
        assert_eq!(render_source(&network).unwrap(), expected);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let network = two_cell_network([(0, 1, f32::NAN), (1, 0, 3.0)]);
        let mut out = Vec::new();
        let err = dump_source(&network, &mut out).unwrap_err();
        assert!(matches!(err, EmitError::NonFinite { .. }));
        assert!(out.is_empty());
    }
}
