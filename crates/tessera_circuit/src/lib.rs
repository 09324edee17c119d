//! The circuit library: reusable circuit models and their typed ports.
//!
//! A [`CircuitLibrary`] is populated once, either through its builder
//! methods or from a JSON [`LibraryDescription`], and is read-only afterwards.
//! Queries mirror what the checker and the netlist writer need: models by
//! name or type, the default model of a type, and ports by type or attribute.

#![warn(missing_docs)]

pub mod description;
pub mod ids;
pub mod library;
pub mod types;

pub use description::{DescriptionError, LibraryDescription, ModelDescription, PortDescription};
pub use ids::{CircuitModelId, CircuitPortId};
pub use library::{CircuitLibrary, CircuitModel, CircuitPort};
pub use types::{CircuitModelType, CircuitPortType};
