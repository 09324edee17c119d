//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-like terminal format:
///
/// ```text
/// error[E301]: MUX circuit model `mux_tree` has no SRAM port
///   --> circuit model `mux_tree`
///    = note: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn severity_label(&self, severity: Severity) -> String {
        if !self.color {
            return severity.to_string();
        }
        let ansi = match severity {
            Severity::Fatal | Severity::Error => "1;31",
            Severity::Warning => "1;33",
            Severity::Note => "1;36",
        };
        format!("\x1b[{ansi}m{severity}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = format!(
            "{}[{}]: {}\n",
            self.severity_label(diag.severity),
            diag.code,
            diag.message
        );
        if let Some(subject) = &diag.subject {
            out.push_str(&format!("  --> {subject}\n"));
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};

    #[test]
    fn render_plain_error() {
        let diag = Diagnostic::error(
            DiagnosticCode::new(Category::Error, 101),
            "circuit models (index=0) and (index=2) share the same name `mux`",
        );
        let output = TerminalRenderer::new(false).render(&diag);
        assert_eq!(
            output,
            "error[E101]: circuit models (index=0) and (index=2) share the same name `mux`\n"
        );
    }

    #[test]
    fn render_subject_and_notes() {
        let diag = Diagnostic::fatal(DiagnosticCode::new(Category::Fatal, 901), "no default")
            .with_subject("circuit model type WIRE")
            .with_help("mark one WIRE model as default");
        let output = TerminalRenderer::new(false).render(&diag);
        assert!(output.starts_with("fatal[F901]: no default\n"));
        assert!(output.contains("  --> circuit model type WIRE\n"));
        assert!(output.contains("   = help: mark one WIRE model as default\n"));
    }

    #[test]
    fn render_with_color() {
        let diag = Diagnostic::error(DiagnosticCode::new(Category::Error, 1), "x");
        let output = TerminalRenderer::new(true).render(&diag);
        assert!(output.contains("\x1b[1;31merror\x1b[0m[E001]: x"));
    }
}
