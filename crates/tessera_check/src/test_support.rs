//! Library fixtures shared by the rule tests.

use tessera_circuit::{CircuitLibrary, CircuitModelId, CircuitModelType, CircuitPortType};

fn add_ports(
    lib: &mut CircuitLibrary,
    model: CircuitModelId,
    ports: &[(CircuitPortType, &str, usize)],
) {
    for &(port_type, name, size) in ports {
        lib.add_model_port(model, port_type, name, size);
    }
}

/// The smallest library every rule accepts.
pub(crate) fn minimal_library() -> CircuitLibrary {
    use CircuitPortType::*;

    let mut lib = CircuitLibrary::new();
    let iopad = lib.add_model("iopad", "iopad", CircuitModelType::IoPad);
    add_ports(
        &mut lib,
        iopad,
        &[(Input, "outpad", 1), (Output, "inpad", 1), (InOut, "pad", 1), (Sram, "en", 1)],
    );

    let mux = lib.add_model("mux_tree", "mux_tree", CircuitModelType::Mux);
    lib.set_model_is_default(mux, true);
    add_ports(&mut lib, mux, &[(Input, "in", 4), (Output, "out", 1), (Sram, "sram", 2)]);

    let sram = lib.add_model("sram6t", "sram", CircuitModelType::Sram);
    add_ports(&mut lib, sram, &[(Input, "in", 1), (Output, "out", 2)]);

    let lut = lib.add_model("lut4", "lut4", CircuitModelType::Lut);
    add_ports(&mut lib, lut, &[(Input, "in", 4), (Output, "out", 1), (Sram, "sram", 16)]);

    let chan = lib.add_model("chan_segment", "track_seg", CircuitModelType::ChanWire);
    lib.set_model_is_default(chan, true);
    add_ports(&mut lib, chan, &[(Input, "in", 1), (Output, "out", 1)]);

    let wire = lib.add_model("direct_interc", "direct", CircuitModelType::Wire);
    lib.set_model_is_default(wire, true);
    add_ports(&mut lib, wire, &[(Input, "in", 1), (Output, "out", 1)]);

    lib
}
