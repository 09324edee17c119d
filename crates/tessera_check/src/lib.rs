//! Structural checks for circuit libraries.
//!
//! Every rule inspects the whole [`CircuitLibrary`], emits one diagnostic per
//! violation and returns how many it found. The [`LibraryChecker`] runs all
//! rules, adds up their counts, and only then checks that the default models
//! the fabric generator relies on are registered. A missing default is fatal
//! and ends the check on the spot.
//!
//! # Rule codes
//!
//! - **E1xx:** uniqueness of names and prefixes, global port attributes
//! - **E2xx:** required model types
//! - **E3xx:** required port types per model
//! - **E4xx:** required port counts and widths per model
//! - **F901:** missing default model (fatal)

#![warn(missing_docs)]

mod engine;
mod error;
mod helpers;
mod rules;

pub use engine::{check_circuit_library, LibraryChecker, REQUIRED_DEFAULT_TYPES};
pub use error::CheckError;
pub use helpers::{check_port_type_and_size, PortRequirement};
pub use rules::register_builtin_rules;
pub use rules::{
    ConfigMemoryPresent, GlobalPortsAreInputs, PortCountAndSize, RequiredModel,
    RequiredPortTypes, SetResetAreGlobal, UniqueModelNames, UniqueModelPrefixes,
};

use tessera_circuit::CircuitLibrary;
use tessera_diagnostics::{DiagnosticCode, DiagnosticSink};

/// A single structural rule over a circuit library.
pub trait LibraryRule {
    /// Returns the diagnostic code emitted by this rule.
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule.
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Checks the library, emits one error per violation and returns the
    /// number of violations.
    fn check(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> usize;
}

#[cfg(test)]
pub(crate) mod test_support;
