//! E104: Set, reset or configuration-enable port is not global.

use tessera_circuit::{CircuitLibrary, CircuitPort};
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::LibraryRule;

/// Every port flagged as set, reset or configuration-enable must also be
/// flagged global. A port fails at most once, naming every role it has.
pub struct SetResetAreGlobal;

fn control_roles(port: &CircuitPort) -> impl Iterator<Item = &'static str> {
    [
        (port.is_set, "set"),
        (port.is_reset, "reset"),
        (port.is_config_enable, "configuration-enable"),
    ]
    .into_iter()
    .filter(|(flag, _)| *flag)
    .map(|(_, role)| role)
}

impl LibraryRule for SetResetAreGlobal {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 104)
    }

    fn name(&self) -> &str {
        "set-reset-are-global"
    }

    fn description(&self) -> &str {
        "set, reset and configuration-enable ports must be global"
    }

    fn check(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> usize {
        let mut num_err = 0;
        for port_id in lib.ports() {
            let port = lib.port(port_id);
            if port.is_global {
                continue;
            }
            let roles: Vec<&str> = control_roles(port).collect();
            if roles.is_empty() {
                continue;
            }
            sink.emit(
                Diagnostic::error(
                    self.code(),
                    format!(
                        "{} port `{}` of circuit model `{}` must be global",
                        roles.join("/"),
                        port.lib_name,
                        lib.port_model_name(port_id)
                    ),
                )
                .with_subject(format!("circuit model `{}`", lib.port_model_name(port_id)))
                .with_help("mark the port as global"),
            );
            num_err += 1;
        }
        num_err
    }
}
