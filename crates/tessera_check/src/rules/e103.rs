//! E103: Global port is not an input.

use tessera_circuit::CircuitLibrary;
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::LibraryRule;

/// Global ports are driven from the fabric top level, so they can only
/// carry signals into a model.
pub struct GlobalPortsAreInputs;

impl LibraryRule for GlobalPortsAreInputs {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 103)
    }

    fn name(&self) -> &str {
        "global-ports-are-inputs"
    }

    fn description(&self) -> &str {
        "global ports must be input ports"
    }

    fn check(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> usize {
        let mut num_err = 0;
        for port_id in lib.ports() {
            let port = lib.port(port_id);
            if port.is_global && !port.port_type.is_input() {
                sink.emit(
                    Diagnostic::error(
                        self.code(),
                        format!(
                            "global port `{}` of circuit model `{}` is of type {}, \
                             but global ports must be inputs",
                            port.lib_name,
                            lib.port_model_name(port_id),
                            port.port_type
                        ),
                    )
                    .with_subject(format!("circuit model `{}`", lib.port_model_name(port_id))),
                );
                num_err += 1;
            }
        }
        num_err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_circuit::{CircuitModelType, CircuitPortType};

    #[test]
    fn global_output_rejected() {
        let mut lib = CircuitLibrary::new();
        let ff = lib.add_model("dff", "dff", CircuitModelType::Ff);
        let q = lib.add_model_port(ff, CircuitPortType::Output, "Q", 1);
        lib.port_mut(q).is_global = true;
        let pad = lib.add_model_port(ff, CircuitPortType::InOut, "pad", 1);
        lib.port_mut(pad).is_global = true;

        let sink = DiagnosticSink::new();
        assert_eq!(GlobalPortsAreInputs.check(&lib, &sink), 2);
        assert!(sink.diagnostics()[0].message.contains("`Q`"));
    }

    #[test]
    fn global_clock_accepted() {
        let mut lib = CircuitLibrary::new();
        let scff = lib.add_model("scff", "scff", CircuitModelType::Scff);
        let clk = lib.add_model_port(scff, CircuitPortType::Clock, "prog_clk", 1);
        lib.port_mut(clk).is_global = true;
        let sink = DiagnosticSink::new();
        assert_eq!(GlobalPortsAreInputs.check(&lib, &sink), 0);
    }
}
