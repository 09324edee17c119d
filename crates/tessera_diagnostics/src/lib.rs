//! Structured diagnostics for circuit-library checks and fabric netlisting.
//!
//! A [`Diagnostic`] carries a severity, a [`DiagnosticCode`], a one-line
//! message and optional notes. The [`DiagnosticSink`] accumulates them in
//! emission order and keeps a running error count, and the
//! [`TerminalRenderer`] formats them for humans.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
