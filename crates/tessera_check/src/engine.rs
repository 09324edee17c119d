//! The checker that runs every registered rule over a circuit library.

use tessera_circuit::{CircuitLibrary, CircuitModelType};
use tessera_config::CheckConfig;
use tessera_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::error::CheckError;
use crate::rules::register_builtin_rules;
use crate::LibraryRule;

/// Model types that must each have a default model, in the order checked.
pub const REQUIRED_DEFAULT_TYPES: [CircuitModelType; 3] = [
    CircuitModelType::Mux,
    CircuitModelType::ChanWire,
    CircuitModelType::Wire,
];

const MISSING_DEFAULT_CODE: DiagnosticCode = DiagnosticCode::new(Category::Fatal, 901);

/// Runs structural rules over a library and accumulates their error counts.
///
/// Rules run in registration order and all of them run, whatever the
/// earlier ones found. The default-model check runs last.
pub struct LibraryChecker {
    rules: Vec<Box<dyn LibraryRule>>,
}

impl LibraryChecker {
    /// Creates a checker with all built-in rules registered for `config`.
    pub fn new(config: &CheckConfig) -> Self {
        let mut checker = Self { rules: Vec::new() };
        register_builtin_rules(&mut checker, config);
        checker
    }

    /// Creates a checker with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&CheckConfig::default())
    }

    /// Registers an additional rule, run after those already registered.
    pub fn register(&mut self, rule: Box<dyn LibraryRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs every rule, then the default-model check.
    ///
    /// Returns the total number of structural errors. The first type in
    /// [`REQUIRED_DEFAULT_TYPES`] without a default model emits a fatal
    /// diagnostic and returns [`CheckError::MissingDefaultModel`] at once.
    pub fn run(&self, lib: &CircuitLibrary, sink: &DiagnosticSink) -> Result<usize, CheckError> {
        let mut num_err = 0;
        for rule in &self.rules {
            let found = rule.check(lib, sink);
            if found > 0 {
                log::debug!("rule {} ({}) found {found} error(s)", rule.code(), rule.name());
            }
            num_err += found;
        }

        for model_type in REQUIRED_DEFAULT_TYPES {
            if lib.default_model(model_type).is_none() {
                sink.emit(
                    Diagnostic::fatal(
                        MISSING_DEFAULT_CODE,
                        format!(
                            "a default circuit model for the type {model_type} must be defined"
                        ),
                    )
                    .with_help(format!("set `is_default` on one {model_type} circuit model")),
                );
                return Err(CheckError::MissingDefaultModel { model_type });
            }
        }

        Ok(num_err)
    }
}

/// Checks a circuit library with the built-in rules.
///
/// Every violation is emitted into `sink`. Returns `Ok(())` for a clean
/// library and [`CheckError::Failed`] with the total count otherwise.
pub fn check_circuit_library(
    lib: &CircuitLibrary,
    config: &CheckConfig,
    sink: &DiagnosticSink,
) -> Result<(), CheckError> {
    log::info!("Checking circuit models...");

    let num_err = LibraryChecker::new(config).run(lib, sink)?;

    log::info!("Finished checking circuit library with {num_err} errors");
    if num_err > 0 {
        return Err(CheckError::Failed { errors: num_err });
    }
    Ok(())
}
