//! Configuration types deserialized from `tessera.toml`.

use serde::Deserialize;

/// The top-level tool configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Circuit-library check settings.
    #[serde(default)]
    pub check: CheckConfig,
    /// Names used when building the pre-configured top module.
    #[serde(default)]
    pub naming: NamingConfig,
    /// Verilog output settings.
    #[serde(default)]
    pub verilog: VerilogConfig,
}

/// Settings for the circuit-library checker.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Also require one BL and one WL port on every SRAM model
    /// (memory-bank style configuration).
    #[serde(default)]
    pub check_blwl: bool,
}

/// Naming conventions shared with the fabric generator.
///
/// These must agree with whatever produced the fabric netlist, since the
/// pre-configured wrapper refers to its module, ports and internal
/// configuration wires by name.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Name of the FPGA top-level module in the fabric hierarchy.
    pub top_module: String,
    /// Appended to the benchmark name to form the wrapper module name.
    pub top_module_postfix: String,
    /// Appended to benchmark I/O names to form wrapper port names.
    pub port_postfix: String,
    /// Instance name of the fabric inside the wrapper.
    pub instance_name: String,
    /// Separator between instance names in hierarchical references.
    pub hierarchy_separator: String,
    /// Name of the configuration-chain data-out signal of every memory block.
    pub config_chain_tail: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            top_module: "fpga_top".to_string(),
            top_module_postfix: "_top_formal_verification".to_string(),
            port_postfix: "_fm".to_string(),
            instance_name: "U0_formal_verification".to_string(),
            hierarchy_separator: ".".to_string(),
            config_chain_tail: "ccff_tail".to_string(),
        }
    }
}

/// Verilog output settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct VerilogConfig {
    /// Constant driven onto fabric I/O pads no benchmark signal is mapped to.
    pub unused_io_value: u8,
    /// Directory holding the preprocessor defines files.
    pub include_dir: String,
    /// File name of the preprocessing flags netlist.
    pub defines_file: String,
    /// File name of the simulation defines netlist.
    pub simulation_defines_file: String,
}

impl Default for VerilogConfig {
    fn default() -> Self {
        Self {
            unused_io_value: 0,
            include_dir: "SRC".to_string(),
            defines_file: "fpga_defines.v".to_string(),
            simulation_defines_file: "fpga_simulation_defines.v".to_string(),
        }
    }
}

impl VerilogConfig {
    /// Returns the include paths in the order they are emitted.
    pub fn include_paths(&self) -> Vec<String> {
        [&self.defines_file, &self.simulation_defines_file]
            .iter()
            .map(|file| {
                if self.include_dir.is_empty() {
                    file.to_string()
                } else {
                    format!("{}/{}", self.include_dir.trim_end_matches('/'), file)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_defaults() {
        let naming = NamingConfig::default();
        assert_eq!(naming.instance_name, "U0_formal_verification");
        assert_eq!(naming.hierarchy_separator, ".");
        assert_eq!(naming.port_postfix, "_fm");
    }

    #[test]
    fn include_paths_join_dir() {
        let verilog = VerilogConfig::default();
        assert_eq!(
            verilog.include_paths(),
            vec!["SRC/fpga_defines.v", "SRC/fpga_simulation_defines.v"]
        );
    }

    #[test]
    fn include_paths_without_dir() {
        let verilog = VerilogConfig {
            include_dir: String::new(),
            ..VerilogConfig::default()
        };
        assert_eq!(verilog.include_paths()[0], "fpga_defines.v");
    }
}
