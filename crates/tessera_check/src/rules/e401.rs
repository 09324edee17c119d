//! E401/E402: Port count or port width differs from what the model type needs.

use tessera_circuit::{CircuitLibrary, CircuitModelType};
use tessera_diagnostics::{DiagnosticCode, DiagnosticSink};

use crate::helpers::{check_port_type_and_size, PortRequirement, PORT_COUNT_CODE};
use crate::LibraryRule;

/// Applies a list of [`PortRequirement`]s to every model of a type.
///
/// Count mismatches are reported as E401 and width mismatches as E402.
pub struct PortCountAndSize {
    model_type: CircuitModelType,
    requirements: Vec<PortRequirement>,
    name: String,
    description: String,
}

impl PortCountAndSize {
    /// Creates a rule applying `requirements` to every `model_type` model.
    pub fn new(model_type: CircuitModelType, requirements: Vec<PortRequirement>) -> Self {
        Self {
            model_type,
            requirements,
            name: format!("{}-port-sizes", model_type.as_str().to_lowercase()),
            description: format!(
                "{model_type} circuit models must have the expected number and width of ports"
            ),
        }
    }

    /// Returns the requirements checked by this rule.
    pub fn requirements(&self) -> &[PortRequirement] {
        &self.requirements
    }
}

impl LibraryRule for PortCountAndSize {
    fn code(&self) -> DiagnosticCode {
        PORT_COUNT_CODE
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
            for req in &self.requirements {
                num_err += check_port_type_and_size(lib, model, req, sink);
            }
        }
        num_err
    }
}
