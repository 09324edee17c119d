//! Shared port-checking helpers.

use tessera_circuit::{CircuitLibrary, CircuitModelId, CircuitPortType};
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

/// Code for a model with the wrong number of ports of a type.
pub(crate) const PORT_COUNT_CODE: DiagnosticCode = DiagnosticCode::new(Category::Error, 401);
/// Code for a port of the right type but the wrong width.
pub(crate) const PORT_SIZE_CODE: DiagnosticCode = DiagnosticCode::new(Category::Error, 402);

/// How many ports of one type a model must have, and how wide each must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRequirement {
    /// The port type being counted.
    pub port_type: CircuitPortType,
    /// Exact number of ports required.
    pub count: usize,
    /// Exact width of each port.
    pub size: usize,
    /// Whether global ports count toward `count`.
    pub include_global: bool,
}

impl PortRequirement {
    /// A requirement that ignores global ports.
    pub const fn local(port_type: CircuitPortType, count: usize, size: usize) -> Self {
        Self {
            port_type,
            count,
            size,
            include_global: false,
        }
    }

    /// A requirement that counts global ports too.
    pub const fn with_global(port_type: CircuitPortType, count: usize, size: usize) -> Self {
        Self {
            port_type,
            count,
            size,
            include_global: true,
        }
    }
}

/// Returns every unordered pair `(i, j)`, `i < j`, of equal values.
///
/// Each pair is reported once, so `k` equal values give `k * (k - 1) / 2`
/// pairs. Order follows `i`, then `j`.
pub(crate) fn equal_pairs<T: PartialEq>(values: &[T]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            if values[i] == values[j] {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Checks one model against one port requirement.
///
/// A count mismatch is one error. Independently, every matching port whose
/// width differs is one more error.
pub fn check_port_type_and_size(
    lib: &CircuitLibrary,
    model: CircuitModelId,
    req: &PortRequirement,
    sink: &DiagnosticSink,
) -> usize {
    let mut num_err = 0;
    let ports = lib.model_ports_by_type(model, req.port_type, !req.include_global);

    if ports.len() != req.count {
        sink.emit(
            Diagnostic::error(
                PORT_COUNT_CODE,
                format!(
                    "expected {} {} port(s) for {} circuit model `{}`, but found {}",
                    req.count,
                    req.port_type,
                    lib.model_type(model),
                    lib.model_name(model),
                    ports.len()
                ),
            )
            .with_subject(format!("circuit model `{}`", lib.model_name(model))),
        );
        num_err += 1;
    }

    for port in ports {
        let circuit_port = lib.port(port);
        if circuit_port.size != req.size {
            sink.emit(
                Diagnostic::error(
                    PORT_SIZE_CODE,
                    format!(
                        "{} port `{}` of circuit model `{}` has size {}, expected {}",
                        circuit_port.port_type,
                        circuit_port.lib_name,
                        lib.model_name(model),
                        circuit_port.size,
                        req.size
                    ),
                )
                .with_subject(format!("circuit model `{}`", lib.model_name(model))),
            );
            num_err += 1;
        }
    }

    num_err
}
