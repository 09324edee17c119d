//! E101: Duplicate model name. Two circuit models share a name.

use tessera_circuit::CircuitLibrary;
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::helpers::equal_pairs;
use crate::LibraryRule;

/// Reports every unordered pair of models with the same name.
pub struct UniqueModelNames;

impl LibraryRule for UniqueModelNames {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 101)
    }

    fn name(&self) -> &str {
        "unique-model-names"
    }

    fn description(&self) -> &str {
        "circuit models must have unique names"
    }

    fn check(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> usize {
        let models: Vec<_> = lib.models().collect();
        let names: Vec<&str> = models.iter().map(|&m| lib.model_name(m)).collect();
        let pairs = equal_pairs(&names);
        for &(i, j) in &pairs {
            sink.emit(
                Diagnostic::error(
                    self.code(),
                    format!(
                        "circuit models (index={i}) and (index={j}) share the same name `{}`",
                        names[i]
                    ),
                )
                .with_subject(format!("circuit model `{}`", names[i])),
            );
        }
        pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_circuit::CircuitModelType;

    #[test]
    fn three_equal_names_give_three_errors() {
        let mut lib = CircuitLibrary::new();
        lib.add_model("dup", "p0", CircuitModelType::Mux);
        lib.add_model("other", "p1", CircuitModelType::Mux);
        lib.add_model("dup", "p2", CircuitModelType::Lut);
        lib.add_model("dup", "p3", CircuitModelType::Wire);
        let sink = DiagnosticSink::new();
        assert_eq!(UniqueModelNames.check(&lib, &sink), 3);
        let messages: Vec<String> = sink.diagnostics().into_iter().map(|d| d.message).collect();
        assert_eq!(
            messages[0],
            "circuit models (index=0) and (index=2) share the same name `dup`"
        );
        assert!(messages[2].contains("(index=2) and (index=3)"));
    }

    #[test]
    fn unique_names_pass() {
        let lib = crate::test_support::minimal_library();
        let sink = DiagnosticSink::new();
        assert_eq!(UniqueModelNames.check(&lib, &sink), 0);
    }
}
