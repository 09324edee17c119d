//! Shared pipeline helpers for CLI commands.
//!
//! Configuration lookup, input reading, the library check step and
//! diagnostic rendering used by both `check` and `preconfig`.

use std::path::{Path, PathBuf};

use tessera_check::check_circuit_library;
use tessera_circuit::{CircuitLibrary, LibraryDescription};
use tessera_config::{CheckConfig, ToolConfig, CONFIG_FILE_NAME};
use tessera_diagnostics::{DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer};

use crate::{GlobalArgs, ReportFormat};

/// Resolves the configuration file path.
///
/// `--config` wins; otherwise `tessera.toml` in the current directory.
pub fn resolve_config_path(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match global.config {
        Some(ref path) => Ok(path.clone()),
        None => Ok(std::env::current_dir()?.join(CONFIG_FILE_NAME)),
    }
}

/// Loads the tool configuration for this invocation.
///
/// An explicitly given config file must exist. The implicit one may be
/// absent, in which case defaults apply.
pub fn load_tool_config(global: &GlobalArgs) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let path = resolve_config_path(global)?;
    if global.config.is_some() && !path.is_file() {
        return Err(format!("config file {} does not exist", path.display()).into());
    }
    log::debug!("Loading configuration from {}", path.display());
    Ok(tessera_config::load_config(&path)?)
}

/// Reads an input file, naming it in the error.
pub fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {e}", path.display()).into())
}

/// Builds a circuit library and runs the structural check on it.
///
/// Diagnostics are rendered before returning. The library is returned only
/// when the check passed.
pub fn build_and_check_library(
    description: &LibraryDescription,
    config: &CheckConfig,
    format: ReportFormat,
    global: &GlobalArgs,
) -> Result<Option<CircuitLibrary>, Box<dyn std::error::Error>> {
    let lib = description.build()?;
    let sink = DiagnosticSink::new();
    let result = check_circuit_library(&lib, config, &sink);
    render_diagnostics(&sink, format, global);
    match result {
        Ok(()) => Ok(Some(lib)),
        Err(e) => {
            log::error!("{e}");
            Ok(None)
        }
    }
}

/// Renders every collected diagnostic, followed by a summary line.
pub fn render_diagnostics(sink: &DiagnosticSink, format: ReportFormat, global: &GlobalArgs) {
    let diagnostics = sink.diagnostics();

    match format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag));
            }
        }
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }

    let error_count = diagnostics.iter().filter(|d| d.severity.is_error()).count();
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    if !global.quiet && format == ReportFormat::Text {
        eprintln!(
            "   Result: {} error(s), {} warning(s)",
            error_count, warning_count
        );
    }
}
