//! E102: Duplicate model prefix. Two circuit models share an instance prefix.

use tessera_circuit::CircuitLibrary;
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::helpers::equal_pairs;
use crate::LibraryRule;

/// Reports every unordered pair of models with the same prefix.
///
/// Generated instance names are built from prefixes, so a clash here turns
/// into colliding module names in the fabric netlist.
pub struct UniqueModelPrefixes;

impl LibraryRule for UniqueModelPrefixes {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 102)
    }

    fn name(&self) -> &str {
        "unique-model-prefixes"
    }

    fn description(&self) -> &str {
        "circuit models must have unique prefixes"
    }

    fn check(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> usize {
        let models: Vec<_> = lib.models().collect();
        let prefixes: Vec<&str> = models.iter().map(|&m| lib.model_prefix(m)).collect();
        let pairs = equal_pairs(&prefixes);
        for &(i, j) in &pairs {
            sink.emit(
                Diagnostic::error(
                    self.code(),
                    format!(
                        "circuit models `{}` and `{}` share the same prefix `{}`",
                        lib.model_name(models[i]),
                        lib.model_name(models[j]),
                        prefixes[i]
                    ),
                )
                .with_subject(format!("circuit model `{}`", lib.model_name(models[j]))),
            );
        }
        pairs.len()
    }
}
