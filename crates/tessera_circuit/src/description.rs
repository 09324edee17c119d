//! JSON description of a circuit library, as exported by the architecture reader.
//!
//! ```json
//! { "models": [
//!     { "name": "mux_tree", "prefix": "mux_tree", "type": "MUX", "is_default": true,
//!       "ports": [ { "type": "INPUT", "name": "in", "size": 4 },
//!                  { "type": "SRAM", "name": "sram", "size": 2 } ] } ] }
//! ```

use crate::library::CircuitLibrary;
use crate::types::{CircuitModelType, CircuitPortType};
use serde::{Deserialize, Serialize};

/// Errors raised while turning a description into a [`CircuitLibrary`].
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    /// The JSON text could not be parsed.
    #[error("failed to parse circuit library: {0}")]
    Json(#[from] serde_json::Error),

    /// A port was declared with zero width.
    #[error("port `{port}` of circuit model `{model}` has size 0")]
    ZeroSizePort {
        /// The owning model.
        model: String,
        /// The offending port.
        port: String,
    },

    /// A port default value was neither 0 nor 1.
    #[error("port `{port}` of circuit model `{model}` has default value {value}, expected 0 or 1")]
    BadDefaultValue {
        /// The owning model.
        model: String,
        /// The offending port.
        port: String,
        /// The value found.
        value: u8,
    },
}

/// A whole circuit library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryDescription {
    /// Models in declaration order.
    pub models: Vec<ModelDescription>,
}

/// One circuit model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescription {
    /// Model name.
    pub name: String,
    /// Instance prefix; defaults to the name.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Model type.
    #[serde(rename = "type")]
    pub model_type: CircuitModelType,
    /// Whether this is the default model of its type.
    #[serde(default)]
    pub is_default: bool,
    /// Ports in declaration order.
    #[serde(default)]
    pub ports: Vec<PortDescription>,
}

fn one() -> usize {
    1
}

/// One circuit port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortDescription {
    /// Port type.
    #[serde(rename = "type")]
    pub port_type: CircuitPortType,
    /// Library name of the port.
    pub name: String,
    /// Netlist prefix; defaults to the name.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Width in bits.
    #[serde(default = "one")]
    pub size: usize,
    /// Global port flag.
    #[serde(default)]
    pub is_global: bool,
    /// Set signal flag.
    #[serde(default)]
    pub is_set: bool,
    /// Reset signal flag.
    #[serde(default)]
    pub is_reset: bool,
    /// Configuration-enable flag.
    #[serde(default)]
    pub is_config_enable: bool,
    /// Programming-only flag.
    #[serde(default)]
    pub is_prog: bool,
    /// Value when unconnected.
    #[serde(default)]
    pub default_value: u8,
}

impl LibraryDescription {
    /// Parses a description from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DescriptionError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the library.
    ///
    /// Only malformed entries are rejected here; the structural rules are
    /// left to the library checker so that they are reported together.
    pub fn build(&self) -> Result<CircuitLibrary, DescriptionError> {
        let mut lib = CircuitLibrary::new();
        for model_desc in &self.models {
            let prefix = model_desc.prefix.as_deref().unwrap_or(&model_desc.name);
            let model = lib.add_model(&model_desc.name, prefix, model_desc.model_type);
            lib.set_model_is_default(model, model_desc.is_default);

            for port_desc in &model_desc.ports {
                if port_desc.size == 0 {
                    return Err(DescriptionError::ZeroSizePort {
                        model: model_desc.name.clone(),
                        port: port_desc.name.clone(),
                    });
                }
                if port_desc.default_value > 1 {
                    return Err(DescriptionError::BadDefaultValue {
                        model: model_desc.name.clone(),
                        port: port_desc.name.clone(),
                        value: port_desc.default_value,
                    });
                }
                let id = lib.add_model_port(
                    model,
                    port_desc.port_type,
                    &port_desc.name,
                    port_desc.size,
                );
                let port = lib.port_mut(id);
                if let Some(prefix) = &port_desc.prefix {
                    port.prefix = prefix.clone();
                }
                port.is_global = port_desc.is_global;
                port.is_set = port_desc.is_set;
                port.is_reset = port_desc.is_reset;
                port.is_config_enable = port_desc.is_config_enable;
                port.is_prog = port_desc.is_prog;
                port.default_value = port_desc.default_value;
            }
        }
        Ok(lib)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUX_JSON: &str = r#"{
        "models": [
            { "name": "mux_tree", "type": "MUX", "is_default": true,
              "ports": [
                { "type": "INPUT", "name": "in", "size": 4 },
                { "type": "OUTPUT", "name": "out" },
                { "type": "SRAM", "name": "sram", "size": 2 },
                { "type": "INPUT", "name": "reset", "is_global": true,
                  "is_reset": true, "default_value": 1 }
              ] }
        ]
    }"#;

    #[test]
    fn build_from_json() {
        let lib = LibraryDescription::from_json(MUX_JSON).unwrap().build().unwrap();
        let mux = lib.find_model("mux_tree").unwrap();
        assert_eq!(lib.model_prefix(mux), "mux_tree");
        assert_eq!(lib.default_model(CircuitModelType::Mux), Some(mux));
        assert_eq!(lib.model(mux).ports().len(), 4);

        let out = lib.model_ports_by_type(mux, CircuitPortType::Output, false)[0];
        assert_eq!(lib.port(out).size, 1);

        let reset = lib.global_ports()[0];
        assert!(lib.port(reset).is_reset);
        assert_eq!(lib.port(reset).default_value, 1);
        assert_eq!(lib.port(reset).prefix, "reset");
    }

    #[test]
    fn zero_size_rejected() {
        let json = r#"{ "models": [ { "name": "m", "type": "LUT",
            "ports": [ { "type": "INPUT", "name": "in", "size": 0 } ] } ] }"#;
        let err = LibraryDescription::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(err, DescriptionError::ZeroSizePort { ref port, .. } if port == "in"));
    }

    #[test]
    fn bad_default_value_rejected() {
        let json = r#"{ "models": [ { "name": "m", "type": "FF",
            "ports": [ { "type": "INPUT", "name": "rst", "default_value": 3 } ] } ] }"#;
        let err = LibraryDescription::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(err, DescriptionError::BadDefaultValue { value: 3, .. }));
    }

    #[test]
    fn unknown_model_type_is_json_error() {
        let json = r#"{ "models": [ { "name": "m", "type": "DSP" } ] }"#;
        assert!(matches!(
            LibraryDescription::from_json(json),
            Err(DescriptionError::Json(_))
        ));
    }
}
