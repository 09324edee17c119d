//! The fabric module hierarchy.

use crate::ids::ModuleId;
use crate::port::BasicPort;
use serde::{Deserialize, Serialize};
use tessera_common::Arena;

/// The role of a module port, as assigned by the fabric generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModulePortType {
    /// Distributed to every instance of some primitive (clocks, resets, ...).
    Global,
    /// General-purpose datapath I/O pads.
    Gpio,
    /// Any other input, typically a configuration-protocol signal.
    Input,
}

/// A port of a module together with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePort {
    /// Name and pin range.
    pub port: BasicPort,
    /// The port's role.
    pub port_type: ModulePortType,
}

/// A module in the fabric hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Module name, unique in the manager.
    pub name: String,
    /// Ports in declaration order.
    pub ports: Vec<ModulePort>,
    /// Instantiated child modules in instantiation order.
    pub children: Vec<ModuleId>,
}

/// Registry of fabric modules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleManager {
    modules: Arena<ModuleId, Module>,
}

impl ModuleManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module with no ports or children.
    pub fn add_module(&mut self, name: impl Into<String>) -> ModuleId {
        self.modules.alloc(Module {
            name: name.into(),
            ports: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Appends a port to a module.
    pub fn add_port(&mut self, module: ModuleId, port: BasicPort, port_type: ModulePortType) {
        self.modules
            .get_mut(module)
            .ports
            .push(ModulePort { port, port_type });
    }

    /// Records that `parent` instantiates `child`.
    pub fn add_child_module(&mut self, parent: ModuleId, child: ModuleId) {
        self.modules.get_mut(parent).children.push(child);
    }

    /// Returns the number of modules.
    pub fn num_modules(&self) -> usize {
        self.modules.len()
    }

    /// Returns the name of a module.
    pub fn module_name(&self, module: ModuleId) -> &str {
        &self.modules[module].name
    }

    /// Finds a module by name.
    pub fn find_module(&self, name: &str) -> Option<ModuleId> {
        self.modules
            .iter()
            .find(|(_, m)| m.name == name)
            .map(|(id, _)| id)
    }

    /// Returns all ports of a module in declaration order.
    pub fn module_ports(&self, module: ModuleId) -> &[ModulePort] {
        &self.modules[module].ports
    }

    /// Returns the ports of a module with the given role, in declaration order.
    pub fn module_ports_by_type(
        &self,
        module: ModuleId,
        port_type: ModulePortType,
    ) -> Vec<BasicPort> {
        self.modules[module]
            .ports
            .iter()
            .filter(|p| p.port_type == port_type)
            .map(|p| p.port.clone())
            .collect()
    }

    /// Returns the modules instantiated by `module`.
    pub fn children(&self, module: ModuleId) -> &[ModuleId] {
        &self.modules[module].children
    }
}
