//! Resolving every bit of a loaded fabric to its memory output.

use tessera_fabric::{config_bit_port, FabricDescription, FabricError, PathNaming};

const NAMING: PathNaming<'static> = PathNaming {
    instance_name: "U0_formal_verification",
    separator: ".",
    data_out: "ccff_tail",
};

#[test]
fn every_bit_resolves_in_load_order() {
    let json = r#"{
        "modules": [ { "name": "fpga_top" } ],
        "bitstream": { "name": "fpga_top", "bits": "1", "children": [
            { "name": "grid_clb_1_1", "children": [
                { "name": "logical_tile_clb_mode_clb__0", "bits": "001" } ] },
            { "name": "sb_1__1_", "bits": "1" } ] }
    }"#;
    let fabric = FabricDescription::from_json(json).unwrap().build().unwrap();

    let resolved: Vec<String> = fabric
        .fabric_bitstream
        .iter()
        .map(|&bit| {
            let port = config_bit_port(&fabric.bitstream, bit, "fpga_top", &NAMING).unwrap();
            format!("{}[{}]", port.name, port.lsb)
        })
        .collect();

    assert_eq!(
        resolved,
        vec![
            "U0_formal_verification.ccff_tail[0]",
            "U0_formal_verification.grid_clb_1_1.logical_tile_clb_mode_clb__0.ccff_tail[0]",
            "U0_formal_verification.grid_clb_1_1.logical_tile_clb_mode_clb__0.ccff_tail[1]",
            "U0_formal_verification.grid_clb_1_1.logical_tile_clb_mode_clb__0.ccff_tail[2]",
            "U0_formal_verification.sb_1__1_.ccff_tail[0]",
        ]
    );
}

#[test]
fn mismatched_top_name_is_reported() {
    let json = r#"{ "modules": [], "bitstream": { "name": "fabric", "bits": "0" } }"#;
    let fabric = FabricDescription::from_json(json).unwrap().build().unwrap();
    let bit = fabric.fabric_bitstream[0];
    let err = config_bit_port(&fabric.bitstream, bit, "fpga_top", &NAMING).unwrap_err();
    assert!(matches!(err, FabricError::HierarchyRootMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "configuration hierarchy is rooted at `fabric`, expected top module `fpga_top`"
    );
}
