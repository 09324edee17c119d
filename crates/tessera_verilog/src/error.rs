//! Pre-configured netlist errors.

use tessera_fabric::FabricError;

/// Errors raised while writing a pre-configured top module.
///
/// Apart from I/O failures these are consistency faults between the fabric,
/// the circuit library and the benchmark placement. They abort the netlist
/// and are never counted as diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PreconfigError {
    /// Writing the netlist failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fabric lookup failed, e.g. a bit not rooted at the top module.
    #[error(transparent)]
    Fabric(#[from] FabricError),

    /// The fabric top module is not in the module hierarchy.
    #[error("top module `{0}` not found in the fabric")]
    TopModuleNotFound(String),

    /// A global port of the top module has no circuit port of the same name.
    #[error("global port `{port}` of the top module has no matching global circuit port")]
    UnlinkedGlobalPort {
        /// The top-module port name.
        port: String,
    },

    /// Several global circuit ports share a name but disagree on attributes.
    #[error("global port `{port}` matches conflicting circuit ports in models {models:?}")]
    AmbiguousGlobalPort {
        /// The top-module port name.
        port: String,
        /// Models owning the conflicting ports, in library order.
        models: Vec<String>,
    },

    /// A global port and its circuit port have different widths.
    #[error(
        "global port `{port}` has width {module_width} but its circuit port has size {circuit_size}"
    )]
    GlobalPortWidthMismatch {
        /// The top-module port name.
        port: String,
        /// Width in the top module.
        module_width: usize,
        /// Size in the circuit library.
        circuit_size: usize,
    },

    /// The top module does not have exactly one GPIO port.
    #[error("expected exactly one GPIO port on the top module, found {0}")]
    GpioPortCount(usize),

    /// A benchmark I/O has no pad assigned.
    #[error("benchmark I/O `{0}` is not placed on any I/O pad")]
    UnplacedIo(String),

    /// A benchmark I/O is placed beyond the end of the GPIO port.
    #[error("benchmark I/O `{block}` is placed on pad {index}, but the GPIO port has {width} pads")]
    IoIndexOutOfRange {
        /// The benchmark I/O.
        block: String,
        /// The pad index found.
        index: usize,
        /// Width of the GPIO port.
        width: usize,
    },
}
