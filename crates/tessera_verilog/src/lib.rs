//! Verilog output for pre-configured FPGA fabrics.
//!
//! [`print_preconfig_top_module`] wraps the generated fabric in a module
//! whose ports match the benchmark design. The wrapper ties global ports to
//! constants or to the benchmark clocks, wires benchmark I/Os to the pads
//! they were placed on, and forces every configuration memory output to its
//! bitstream value, so the fabric behaves as the configured design from the
//! first cycle.
//!
//! Output goes through the [`NetlistEmitter`] trait; [`VerilogWriter`] is the
//! text implementation.

#![warn(missing_docs)]

pub mod benchmark;
pub mod emitter;
pub mod error;
pub mod preconfig;
pub mod writer;

pub use benchmark::{
    benchmark_clock_names, BenchmarkDescription, BlockPlacement, IoPlacement, LogicalBlock,
    LogicalBlockKind, PadMap,
};
pub use emitter::{NetlistEmitter, PortDirection};
pub use error::PreconfigError;
pub use preconfig::{
    connect_global_ports, connect_ios, find_linked_global_port, load_bitstream,
    print_preconfig_top_module, write_preconfig_top_module, PreconfigContext,
};
pub use writer::VerilogWriter;

#[cfg(test)]
pub(crate) mod test_support;
