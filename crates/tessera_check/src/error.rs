//! Outcome of a failed library check.

use tessera_circuit::CircuitModelType;

/// Why a circuit library was rejected.
///
/// The two variants are different severities: `Failed` is produced after
/// every structural rule has run, `MissingDefaultModel` is produced as soon
/// as the first missing default is seen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// No default model is registered for a type the fabric generator needs.
    #[error("no default circuit model defined for type {model_type}")]
    MissingDefaultModel {
        /// The type lacking a default.
        model_type: CircuitModelType,
    },

    /// One or more structural rules were violated.
    #[error("circuit library check failed with {errors} error(s)")]
    Failed {
        /// Number of violations found.
        errors: usize,
    },
}

impl CheckError {
    /// Returns `true` if the check was cut short.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CheckError::MissingDefaultModel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let fatal = CheckError::MissingDefaultModel {
            model_type: CircuitModelType::ChanWire,
        };
        assert_eq!(format!("{fatal}"), "no default circuit model defined for type CHAN_WIRE");
        assert!(fatal.is_fatal());

        let failed = CheckError::Failed { errors: 3 };
        assert_eq!(format!("{failed}"), "circuit library check failed with 3 error(s)");
        assert!(!failed.is_fatal());
    }
}
