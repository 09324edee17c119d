//! E201: Required circuit model type is missing.

use tessera_circuit::{CircuitLibrary, CircuitModelType};
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::LibraryRule;

/// Requires at least one model of a given type.
pub struct RequiredModel {
    model_type: CircuitModelType,
    name: String,
    description: String,
}

impl RequiredModel {
    /// Creates a rule requiring a model of `model_type`.
    pub fn new(model_type: CircuitModelType) -> Self {
        Self {
            model_type,
            name: format!("required-{}-model", model_type.as_str().to_lowercase()),
            description: format!("at least one {model_type} circuit model must be defined"),
        }
    }
}

impl LibraryRule for RequiredModel {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 201)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> usize {
        if !lib.models_by_type(self.model_type).is_empty() {
            return 0;
        }
        sink.emit(Diagnostic::error(
            self.code(),
            format!("no {} circuit model is defined", self.model_type),
        ));
        1
    }
}
