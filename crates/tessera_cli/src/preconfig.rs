//! `tessera preconfig`: write the pre-configured top module of a fabric.
//!
//! 1. Load config
//! 2. Read the design bundle (library, fabric, placed benchmark)
//! 3. Check the circuit library; stop on failure
//! 4. Build the fabric graphs and the benchmark placement
//! 5. Write `<design>_top_formal_verification.v`

use std::path::PathBuf;

use serde::Deserialize;
use tessera_circuit::LibraryDescription;
use tessera_fabric::FabricDescription;
use tessera_verilog::{write_preconfig_top_module, BenchmarkDescription, PreconfigContext};

use crate::pipeline::{build_and_check_library, load_tool_config, read_input};
use crate::{GlobalArgs, PreconfigArgs};

/// Everything needed to write one pre-configured top module.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignBundle {
    /// The circuit library the fabric was generated from.
    pub library: LibraryDescription,
    /// The generated fabric.
    pub fabric: FabricDescription,
    /// The placed benchmark.
    pub benchmark: BenchmarkDescription,
}

/// Runs the `tessera preconfig` command.
///
/// Returns exit code 0 once the netlist is written, 1 if the circuit
/// library is rejected.
pub fn run(args: &PreconfigArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_tool_config(global)?;

    let text = read_input(&args.design)?;
    let bundle: DesignBundle = serde_json::from_str(&text)
        .map_err(|e| format!("failed to parse design {}: {e}", args.design.display()))?;

    let Some(circuit_lib) =
        build_and_check_library(&bundle.library, &config.check, args.format, global)?
    else {
        return Ok(1);
    };

    let fabric = bundle.fabric.build()?;
    let circuit_name = bundle.benchmark.name.clone();
    let (blocks, pads) = bundle.benchmark.into_parts();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&circuit_name, &config.naming.top_module_postfix));

    if !global.quiet {
        eprintln!("   Writing {}", output.display());
    }

    let ctx = PreconfigContext {
        circuit_name: &circuit_name,
        modules: &fabric.modules,
        bitstream: &fabric.bitstream,
        fabric_bitstream: &fabric.fabric_bitstream,
        circuit_lib: &circuit_lib,
        blocks: &blocks,
        placement: &pads,
        naming: &config.naming,
        verilog: &config.verilog,
    };
    write_preconfig_top_module(&output, &ctx)?;

    Ok(0)
}

fn default_output_path(circuit_name: &str, postfix: &str) -> PathBuf {
    PathBuf::from(format!("{circuit_name}{postfix}.v"))
}
