//! E301: Circuit model lacks a required port type.

use tessera_circuit::{CircuitLibrary, CircuitModelType, CircuitPortType};
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::LibraryRule;

/// Requires every model of a type to have at least one port of each listed
/// port type. Global ports count.
///
/// A library with no model of the type passes; existence is a separate rule.
pub struct RequiredPortTypes {
    model_type: CircuitModelType,
    port_types: Vec<CircuitPortType>,
    name: String,
    description: String,
}

impl RequiredPortTypes {
    /// Creates a rule for `model_type` requiring each of `port_types`.
    pub fn new(model_type: CircuitModelType, port_types: &[CircuitPortType]) -> Self {
        let listed: Vec<&str> = port_types.iter().map(|t| t.as_str()).collect();
        Self {
            model_type,
            port_types: port_types.to_vec(),
            name: format!("{}-port-types", model_type.as_str().to_lowercase()),
            description: format!(
                "{model_type} circuit models must have {} ports",
                listed.join(", ")
            ),
        }
    }
}

impl LibraryRule for RequiredPortTypes {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 301)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> usize {
        let mut num_err = 0;
        for model in lib.models_by_type(self.model_type) {
            for &port_type in &self.port_types {
                if !lib.model_ports_by_type(model, port_type, false).is_empty() {
                    continue;
                }
                sink.emit(
                    Diagnostic::error(
                        self.code(),
                        format!(
                            "{} circuit model `{}` has no {} port",
                            self.model_type,
                            lib.model_name(model),
                            port_type
                        ),
                    )
                    .with_subject(format!("circuit model `{}`", lib.model_name(model))),
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

    #[test]
    fn one_error_per_missing_type() {
        let mut lib = CircuitLibrary::new();
        let pad = lib.add_model("iopad", "iopad", CircuitModelType::IoPad);
        lib.add_model_port(pad, CircuitPortType::Input, "outpad", 1);
        lib.add_model_port(pad, CircuitPortType::Output, "inpad", 1);
        let rule = RequiredPortTypes::new(
            CircuitModelType::IoPad,
            &[
                CircuitPortType::Input,
                CircuitPortType::Output,
                CircuitPortType::InOut,
                CircuitPortType::Sram,
            ],
        );
        let sink = DiagnosticSink::new();
        assert_eq!(rule.check(&lib, &sink), 2);
        let messages: Vec<String> = sink.diagnostics().into_iter().map(|d| d.message).collect();
        assert_eq!(messages[0], "IOPAD circuit model `iopad` has no INOUT port");
        assert_eq!(messages[1], "IOPAD circuit model `iopad` has no SRAM port");
    }

    #[test]
    fn global_ports_count() {
        let mut lib = CircuitLibrary::new();
        let ff = lib.add_model("dff", "dff", CircuitModelType::Ff);
        let clk = lib.add_model_port(ff, CircuitPortType::Clock, "clk", 1);
        lib.port_mut(clk).is_global = true;
        let rule = RequiredPortTypes::new(CircuitModelType::Ff, &[CircuitPortType::Clock]);
        let sink = DiagnosticSink::new();
        assert_eq!(rule.check(&lib, &sink), 0);
    }

    #[test]
    fn no_models_of_type_passes() {
        let lib = CircuitLibrary::new();
        let rule = RequiredPortTypes::new(CircuitModelType::Lut, &[CircuitPortType::Sram]);
        assert_eq!(rule.check(&lib, &DiagnosticSink::new()), 0);
        assert_eq!(rule.name(), "lut-port-types");
    }
}
