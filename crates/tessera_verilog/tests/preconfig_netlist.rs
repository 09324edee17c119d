//! Full pre-configured netlists written from JSON descriptions.

use tessera_circuit::LibraryDescription;
use tessera_config::{NamingConfig, VerilogConfig};
use tessera_fabric::FabricDescription;
use tessera_verilog::{
    print_preconfig_top_module, write_preconfig_top_module, BenchmarkDescription,
    PreconfigContext, PreconfigError, VerilogWriter,
};

const LIBRARY: &str = r#"{ "models": [
    { "name": "scff", "type": "SCFF", "ports": [
        { "type": "INPUT", "name": "D" },
        { "type": "CLOCK", "name": "prog_clk", "is_global": true, "is_prog": true },
        { "type": "OUTPUT", "name": "Q" }, { "type": "OUTPUT", "name": "QN" } ] },
    { "name": "static_dff", "type": "FF", "ports": [
        { "type": "INPUT", "name": "D" },
        { "type": "INPUT", "name": "set", "is_global": true, "is_set": true },
        { "type": "INPUT", "name": "reset", "is_global": true, "is_reset": true,
          "default_value": 1 },
        { "type": "CLOCK", "name": "clk", "is_global": true },
        { "type": "OUTPUT", "name": "Q" } ] }
] }"#;

const AND2_FABRIC: &str = r#"{
    "modules": [
        { "name": "fpga_top",
          "ports": [
            { "name": "prog_clk", "role": "GLOBAL" },
            { "name": "gfpga_pad", "role": "GPIO", "width": 4 },
            { "name": "ccff_head", "role": "INPUT" } ],
          "children": ["grid_clb", "sb_0_0"] },
        { "name": "grid_clb" },
        { "name": "sb_0_0" }
    ],
    "bitstream": { "name": "fpga_top", "children": [
        { "name": "grid_clb_1_1", "bits": "10" },
        { "name": "sb_0_0", "bits": "1" } ] }
}"#;

const AND2_BENCHMARK: &str = r#"{ "name": "and2", "blocks": [
    { "name": "a", "kind": "INPAD", "pad": 0 },
    { "name": "b", "kind": "INPAD", "pad": 1 },
    { "name": "n1", "kind": "OTHER" },
    { "name": "c", "kind": "OUTPAD", "pad": 3 } ] }"#;

const AND2_NETLIST: &str = "\
//-------------------------------------------
//\tFPGA Synthesizable Verilog Netlist
//\tDescription: Verilog netlist for pre-configured FPGA fabric by design: and2
//\tAuthor: Tessera
//-------------------------------------------
//----- Time scale -----
`timescale 1ns / 1ps

`include \"SRC/fpga_defines.v\"
`include \"SRC/fpga_simulation_defines.v\"

module and2_top_formal_verification (
    input [0:0] a_fm,
    input [0:0] b_fm,
    output [0:0] c_fm
);

// ----- Global ports of FPGA fabric -----
wire [0:0] prog_clk;

// ----- I/Os of FPGA fabric -----
wire [0:3] gfpga_pad;

// ----- Configuration protocols of FPGA fabric -----
wire [0:0] ccff_head;

// ----- FPGA top-level module to be capsulated -----
    fpga_top U0_formal_verification (
        .prog_clk(prog_clk[0]),
        .gfpga_pad(gfpga_pad[0:3]),
        .ccff_head(ccff_head[0])
    );

// ----- Begin Connect Global ports of FPGA top module -----
    assign prog_clk[0] = 1'b0;
// ----- End Connect Global ports of FPGA top module -----

// ----- Link Benchmark I/Os to FPGA I/Os -----
// ----- Benchmark I/O a is mapped to FPGA IOPAD gfpga_pad[0] -----
    assign gfpga_pad[0] = a_fm[0];
// ----- Benchmark I/O b is mapped to FPGA IOPAD gfpga_pad[1] -----
    assign gfpga_pad[1] = b_fm[0];
// ----- Benchmark I/O c is mapped to FPGA IOPAD gfpga_pad[3] -----
    assign c_fm[0] = gfpga_pad[3];

// ----- Wire unused FPGA I/Os to constants -----
    assign gfpga_pad[2] = 1'b0;

// ----- Begin load bitstream to configuration memories -----
    assign U0_formal_verification.grid_clb_1_1.ccff_tail[0] = 1'b1;
    assign U0_formal_verification.grid_clb_1_1.ccff_tail[1] = 1'b0;
    assign U0_formal_verification.sb_0_0.ccff_tail[0] = 1'b1;
// ----- End load bitstream to configuration memories -----
endmodule
// ----- END Verilog module for and2_top_formal_verification -----

";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render(
    fabric_json: &str,
    benchmark_json: &str,
    verilog: &VerilogConfig,
) -> Result<String, PreconfigError> {
    let lib = LibraryDescription::from_json(LIBRARY).unwrap().build().unwrap();
    let fabric = FabricDescription::from_json(fabric_json).unwrap().build().unwrap();
    let benchmark: BenchmarkDescription = serde_json::from_str(benchmark_json).unwrap();
    let name = benchmark.name.clone();
    let (blocks, pads) = benchmark.into_parts();
    let naming = NamingConfig::default();

    let ctx = PreconfigContext {
        circuit_name: &name,
        modules: &fabric.modules,
        bitstream: &fabric.bitstream,
        fabric_bitstream: &fabric.fabric_bitstream,
        circuit_lib: &lib,
        blocks: &blocks,
        placement: &pads,
        naming: &naming,
        verilog,
    };
    let mut writer = VerilogWriter::new(Vec::new());
    print_preconfig_top_module(&mut writer, &ctx)?;
    Ok(String::from_utf8(writer.into_inner()).unwrap())
}

#[test]
fn and2_netlist_text() {
    init_logging();
    let text = render(AND2_FABRIC, AND2_BENCHMARK, &VerilogConfig::default()).unwrap();
    assert_eq!(text, AND2_NETLIST);
}

#[test]
fn unused_pads_follow_configured_value() {
    init_logging();
    let verilog = VerilogConfig {
        unused_io_value: 1,
        ..VerilogConfig::default()
    };
    let text = render(AND2_FABRIC, AND2_BENCHMARK, &verilog).unwrap();
    assert!(text.contains("    assign gfpga_pad[2] = 1'b1;\n"));
}

#[test]
fn counter_clock_and_resets() {
    init_logging();
    let fabric = r#"{
        "modules": [ { "name": "fpga_top", "ports": [
            { "name": "set", "role": "GLOBAL" },
            { "name": "reset", "role": "GLOBAL" },
            { "name": "clk", "role": "GLOBAL" },
            { "name": "gfpga_pad", "role": "GPIO", "width": 2 } ] } ],
        "bitstream": { "name": "fpga_top", "bits": "0" }
    }"#;
    let benchmark = r#"{ "name": "counter", "blocks": [
        { "name": "clock", "kind": "INPAD", "is_clock": true, "pad": 0 },
        { "name": "q", "kind": "OUTPAD", "pad": 1 } ] }"#;
    let text = render(fabric, benchmark, &VerilogConfig::default()).unwrap();

    assert!(text.contains("    assign set[0] = 1'b0;\n"));
    assert!(text.contains("    assign reset[0] = 1'b1;\n"));
    assert!(text.contains("    assign clk[0] = clock_fm[0];\n"));
    assert!(text.contains("    assign gfpga_pad[0] = clock_fm[0];\n"));
    assert!(text.contains("    assign U0_formal_verification.ccff_tail[0] = 1'b0;\n"));
    assert!(!text.contains("Wire unused FPGA I/Os to constants -----\n    assign"));
}

#[test]
fn chain_order_from_description_is_kept() {
    init_logging();
    let fabric = AND2_FABRIC.trim_end().trim_end_matches('}').to_string()
        + r#", "fabric_bitstream": [
            { "block": "fpga_top/sb_0_0", "index": 0 },
            { "block": "fpga_top/grid_clb_1_1", "index": 1 },
            { "block": "fpga_top/grid_clb_1_1", "index": 0 } ] }"#;
    let text = render(&fabric, AND2_BENCHMARK, &VerilogConfig::default()).unwrap();
    let load = "\
// ----- Begin load bitstream to configuration memories -----
    assign U0_formal_verification.sb_0_0.ccff_tail[0] = 1'b1;
    assign U0_formal_verification.grid_clb_1_1.ccff_tail[1] = 1'b0;
    assign U0_formal_verification.grid_clb_1_1.ccff_tail[0] = 1'b1;
// ----- End load bitstream to configuration memories -----
";
    assert!(text.contains(load));
}

#[test]
fn unknown_global_port_aborts() {
    init_logging();
    let fabric = r#"{ "modules": [ { "name": "fpga_top", "ports": [
        { "name": "enable", "role": "GLOBAL" },
        { "name": "gfpga_pad", "role": "GPIO" } ] } ] }"#;
    let err = render(fabric, r#"{ "name": "empty", "blocks": [] }"#, &VerilogConfig::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "global port `enable` of the top module has no matching global circuit port"
    );
}

#[test]
fn writes_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("and2_top_formal_verification.v");

    let lib = LibraryDescription::from_json(LIBRARY).unwrap().build().unwrap();
    let fabric = FabricDescription::from_json(AND2_FABRIC).unwrap().build().unwrap();
    let benchmark: BenchmarkDescription = serde_json::from_str(AND2_BENCHMARK).unwrap();
    let (blocks, pads) = benchmark.into_parts();
    let naming = NamingConfig::default();
    let verilog = VerilogConfig::default();
    let ctx = PreconfigContext {
        circuit_name: "and2",
        modules: &fabric.modules,
        bitstream: &fabric.bitstream,
        fabric_bitstream: &fabric.fabric_bitstream,
        circuit_lib: &lib,
        blocks: &blocks,
        placement: &pads,
        naming: &naming,
        verilog: &verilog,
    };
    write_preconfig_top_module(&path, &ctx).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), AND2_NETLIST);
}
