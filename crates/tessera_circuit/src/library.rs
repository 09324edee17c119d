//! The in-memory circuit library registry.

use crate::ids::{CircuitModelId, CircuitPortId};
use crate::types::{CircuitModelType, CircuitPortType};
use serde::{Deserialize, Serialize};
use tessera_common::Arena;

/// A circuit model: a parameterized definition of one physical primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitModel {
    /// Model name; unique across a valid library.
    pub name: String,
    /// Instance-name prefix; unique across a valid library.
    pub prefix: String,
    /// The kind of primitive.
    pub model_type: CircuitModelType,
    /// Whether this is the default model for its type.
    pub is_default: bool,
    ports: Vec<CircuitPortId>,
}

impl CircuitModel {
    /// Returns the model's ports in declaration order.
    pub fn ports(&self) -> &[CircuitPortId] {
        &self.ports
    }
}

/// A typed port of a circuit model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitPort {
    /// The model owning this port.
    pub model: CircuitModelId,
    /// The structural role of the port.
    pub port_type: CircuitPortType,
    /// The port name as written in the architecture description. Global
    /// ports of the generated fabric are named after it.
    pub lib_name: String,
    /// Prefix used for the port in generated netlists.
    pub prefix: String,
    /// Width in bits.
    pub size: usize,
    /// Distributed to every instance of the model instead of wired per use.
    pub is_global: bool,
    /// Acts as a set signal.
    pub is_set: bool,
    /// Acts as a reset signal.
    pub is_reset: bool,
    /// Acts as a configuration-enable signal.
    pub is_config_enable: bool,
    /// Only used while programming the fabric.
    pub is_prog: bool,
    /// Value driven when the port is left unconnected.
    pub default_value: u8,
}

/// Registry of circuit models and ports, addressed by stable IDs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircuitLibrary {
    models: Arena<CircuitModelId, CircuitModel>,
    ports: Arena<CircuitPortId, CircuitPort>,
}

impl CircuitLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model with no ports.
    pub fn add_model(
        &mut self,
        name: impl Into<String>,
        prefix: impl Into<String>,
        model_type: CircuitModelType,
    ) -> CircuitModelId {
        self.models.alloc(CircuitModel {
            name: name.into(),
            prefix: prefix.into(),
            model_type,
            is_default: false,
            ports: Vec::new(),
        })
    }

    /// Marks or unmarks a model as the default of its type.
    pub fn set_model_is_default(&mut self, model: CircuitModelId, is_default: bool) {
        self.models.get_mut(model).is_default = is_default;
    }

    /// Adds a port to a model. All attribute flags start cleared and the
    /// prefix defaults to the library name.
    pub fn add_model_port(
        &mut self,
        model: CircuitModelId,
        port_type: CircuitPortType,
        lib_name: impl Into<String>,
        size: usize,
    ) -> CircuitPortId {
        let lib_name = lib_name.into();
        let port = self.ports.alloc(CircuitPort {
            model,
            port_type,
            prefix: lib_name.clone(),
            lib_name,
            size,
            is_global: false,
            is_set: false,
            is_reset: false,
            is_config_enable: false,
            is_prog: false,
            default_value: 0,
        });
        self.models.get_mut(model).ports.push(port);
        port
    }

    /// Returns a mutable port, for setting attributes while building.
    pub fn port_mut(&mut self, port: CircuitPortId) -> &mut CircuitPort {
        self.ports.get_mut(port)
    }

    /// Iterates over all model IDs in declaration order.
    pub fn models(&self) -> impl Iterator<Item = CircuitModelId> + '_ {
        self.models.ids()
    }

    /// Returns a model.
    pub fn model(&self, model: CircuitModelId) -> &CircuitModel {
        &self.models[model]
    }

    /// Returns the name of a model.
    pub fn model_name(&self, model: CircuitModelId) -> &str {
        &self.models[model].name
    }

    /// Returns the prefix of a model.
    pub fn model_prefix(&self, model: CircuitModelId) -> &str {
        &self.models[model].prefix
    }

    /// Returns the type of a model.
    pub fn model_type(&self, model: CircuitModelId) -> CircuitModelType {
        self.models[model].model_type
    }

    /// Finds the first model with the given name.
    pub fn find_model(&self, name: &str) -> Option<CircuitModelId> {
        self.models.iter().find(|(_, m)| m.name == name).map(|(id, _)| id)
    }

    /// Returns all models of a type in declaration order.
    pub fn models_by_type(&self, model_type: CircuitModelType) -> Vec<CircuitModelId> {
        self.models
            .iter()
            .filter(|(_, m)| m.model_type == model_type)
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns the default model of a type, if one is registered.
    pub fn default_model(&self, model_type: CircuitModelType) -> Option<CircuitModelId> {
        self.models
            .iter()
            .find(|(_, m)| m.model_type == model_type && m.is_default)
            .map(|(id, _)| id)
    }

    /// Iterates over all port IDs in declaration order.
    pub fn ports(&self) -> impl Iterator<Item = CircuitPortId> + '_ {
        self.ports.ids()
    }

    /// Returns a port.
    pub fn port(&self, port: CircuitPortId) -> &CircuitPort {
        &self.ports[port]
    }

    /// Returns the name of the model owning a port.
    pub fn port_model_name(&self, port: CircuitPortId) -> &str {
        self.model_name(self.ports[port].model)
    }

    /// Returns the ports of a model with the given type.
    ///
    /// When `ignore_global` is set, global ports are left out.
    pub fn model_ports_by_type(
        &self,
        model: CircuitModelId,
        port_type: CircuitPortType,
        ignore_global: bool,
    ) -> Vec<CircuitPortId> {
        self.models[model]
            .ports
            .iter()
            .copied()
            .filter(|&p| {
                let port = &self.ports[p];
                port.port_type == port_type && !(ignore_global && port.is_global)
            })
            .collect()
    }

    /// Returns every global port in the library in declaration order.
    pub fn global_ports(&self) -> Vec<CircuitPortId> {
        self.ports
            .iter()
            .filter(|(_, p)| p.is_global)
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dff_library() -> (CircuitLibrary, CircuitModelId) {
        let mut lib = CircuitLibrary::new();
        let ff = lib.add_model("static_dff", "dff", CircuitModelType::Ff);
        lib.add_model_port(ff, CircuitPortType::Input, "D", 1);
        let set = lib.add_model_port(ff, CircuitPortType::Input, "set", 1);
        lib.port_mut(set).is_global = true;
        lib.port_mut(set).is_set = true;
        lib.add_model_port(ff, CircuitPortType::Clock, "clk", 1);
        lib.add_model_port(ff, CircuitPortType::Output, "Q", 1);
        (lib, ff)
    }

    #[test]
    fn ports_keep_declaration_order() {
        let (lib, ff) = dff_library();
        let names: Vec<&str> = lib
            .model(ff)
            .ports()
            .iter()
            .map(|&p| lib.port(p).lib_name.as_str())
            .collect();
        assert_eq!(names, vec!["D", "set", "clk", "Q"]);
        assert_eq!(lib.port_model_name(lib.model(ff).ports()[0]), "static_dff");
    }

    #[test]
    fn ports_by_type_with_and_without_globals() {
        let (lib, ff) = dff_library();
        assert_eq!(lib.model_ports_by_type(ff, CircuitPortType::Input, false).len(), 2);
        assert_eq!(lib.model_ports_by_type(ff, CircuitPortType::Input, true).len(), 1);
        assert!(lib.model_ports_by_type(ff, CircuitPortType::Sram, false).is_empty());
    }

    #[test]
    fn global_ports_listed() {
        let (lib, _) = dff_library();
        let globals = lib.global_ports();
        assert_eq!(globals.len(), 1);
        assert_eq!(lib.port(globals[0]).lib_name, "set");
    }

    #[test]
    fn default_model_lookup() {
        let mut lib = CircuitLibrary::new();
        let a = lib.add_model("mux_a", "mux_a", CircuitModelType::Mux);
        let b = lib.add_model("mux_b", "mux_b", CircuitModelType::Mux);
        assert_eq!(lib.default_model(CircuitModelType::Mux), None);
        lib.set_model_is_default(b, true);
        assert_eq!(lib.default_model(CircuitModelType::Mux), Some(b));
        assert_eq!(lib.models_by_type(CircuitModelType::Mux), vec![a, b]);
        assert!(lib.models_by_type(CircuitModelType::Lut).is_empty());
    }

    #[test]
    fn find_model_by_name() {
        let (lib, ff) = dff_library();
        assert_eq!(lib.find_model("static_dff"), Some(ff));
        assert_eq!(lib.find_model("missing"), None);
        assert_eq!(lib.model_prefix(ff), "dff");
    }
}
