//! E202: No configuration memory model.

use tessera_circuit::{CircuitLibrary, CircuitModelType};
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::LibraryRule;

/// Requires an SRAM or a scan-chain flip-flop model to hold the bitstream.
pub struct ConfigMemoryPresent;

impl LibraryRule for ConfigMemoryPresent {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 202)
    }

    fn name(&self) -> &str {
        "config-memory-present"
    }

    fn description(&self) -> &str {
        "at least one SRAM or SCFF circuit model must be defined"
    }

    fn check(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> usize {
        let num_memories = lib.models_by_type(CircuitModelType::Sram).len()
            + lib.models_by_type(CircuitModelType::Scff).len();
        if num_memories > 0 {
            return 0;
        }
        sink.emit(
            Diagnostic::error(
                self.code(),
                "no SRAM or SCFF circuit model is defined to store configuration bits",
            )
            .with_help("define a circuit model of type SRAM or SCFF"),
        );
        1
    }
}
