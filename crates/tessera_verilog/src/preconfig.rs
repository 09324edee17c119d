//! The pre-configured fabric top module.
//!
//! ```text
//!                       +-------------------------------------------+
//!                       |             FPGA fabric                   |
//!                       |   0/1 ---> global ports                   |
//!   benchmark clock --->|--------> operating clock                  |
//!   benchmark inputs -->|--------> mapped I/O pads                  |
//!   benchmark outputs <-|<-------- mapped I/O pads                  |
//!                       |   0/1 ---> unmapped I/O pads              |
//!   bitstream --------->|--------> configuration memory outputs     |
//!                       +-------------------------------------------+
//! ```
//!
//! The wrapper is written straight to the emitter and is never added to the
//! module hierarchy: forcing internal configuration nets is not something a
//! regular fabric module does.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use tessera_circuit::{CircuitLibrary, CircuitPortId, CircuitPortType};
use tessera_config::{NamingConfig, VerilogConfig};
use tessera_fabric::{
    config_bit_port, BasicPort, BitstreamManager, ConfigBitId, ModuleId, ModuleManager,
    ModulePortType, PathNaming,
};

use crate::benchmark::{benchmark_clock_names, IoPlacement, LogicalBlock, LogicalBlockKind};
use crate::emitter::{NetlistEmitter, PortDirection};
use crate::error::PreconfigError;
use crate::writer::VerilogWriter;

/// Everything the pre-configured top module is built from.
#[derive(Clone, Copy)]
pub struct PreconfigContext<'a> {
    /// Benchmark design name.
    pub circuit_name: &'a str,
    /// Fabric module hierarchy.
    pub modules: &'a ModuleManager,
    /// Fabric configuration blocks and bits.
    pub bitstream: &'a BitstreamManager,
    /// Bits in load order.
    pub fabric_bitstream: &'a [ConfigBitId],
    /// The circuit library the fabric was generated from.
    pub circuit_lib: &'a CircuitLibrary,
    /// Logical blocks of the benchmark, in netlist order.
    pub blocks: &'a [LogicalBlock],
    /// Pads the benchmark I/Os were placed on.
    pub placement: &'a dyn IoPlacement,
    /// Naming conventions shared with the fabric generator.
    pub naming: &'a NamingConfig,
    /// Output settings.
    pub verilog: &'a VerilogConfig,
}

impl PreconfigContext<'_> {
    fn wrapper_name(&self) -> String {
        format!("{}{}", self.circuit_name, self.naming.top_module_postfix)
    }

    fn benchmark_port(&self, name: &str) -> BasicPort {
        BasicPort::pin(format!("{name}{}", self.naming.port_postfix), 0)
    }

    fn top_module(&self) -> Result<ModuleId, PreconfigError> {
        self.modules
            .find_module(&self.naming.top_module)
            .ok_or_else(|| PreconfigError::TopModuleNotFound(self.naming.top_module.clone()))
    }
}

/// Finds the global circuit port a top-module global port is named after.
///
/// Returns `Ok(None)` when no global circuit port has that library name.
/// Several matches are accepted if they agree on type, size, programming
/// flag and default value, and the first is returned; otherwise the match
/// is ambiguous.
pub fn find_linked_global_port(
    lib: &CircuitLibrary,
    global_ports: &[CircuitPortId],
    name: &str,
) -> Result<Option<CircuitPortId>, PreconfigError> {
    let matches: Vec<CircuitPortId> = global_ports
        .iter()
        .copied()
        .filter(|&p| lib.port(p).lib_name == name)
        .collect();

    let Some((&first, rest)) = matches.split_first() else {
        return Ok(None);
    };
    let attrs = |p: CircuitPortId| {
        let port = lib.port(p);
        (port.port_type, port.size, port.is_prog, port.default_value)
    };
    if rest.iter().any(|&p| attrs(p) != attrs(first)) {
        return Err(PreconfigError::AmbiguousGlobalPort {
            port: name.to_string(),
            models: matches
                .iter()
                .map(|&p| lib.port_model_name(p).to_string())
                .collect(),
        });
    }
    Ok(Some(first))
}

/// Drives every global port of the top module.
///
/// An operating clock (a non-programming `CLOCK` port) is wired pin by pin
/// to every benchmark clock. Every other global port is tied, pin by pin, to
/// its circuit port's default value.
pub fn connect_global_ports(
    emitter: &mut dyn NetlistEmitter,
    ctx: &PreconfigContext<'_>,
    top_module: ModuleId,
    clock_names: &[String],
) -> Result<(), PreconfigError> {
    emitter.comment("----- Begin Connect Global ports of FPGA top module -----")?;

    let global_ports = ctx.circuit_lib.global_ports();
    for module_port in ctx.modules.module_ports_by_type(top_module, ModulePortType::Global) {
        let linked = find_linked_global_port(ctx.circuit_lib, &global_ports, &module_port.name)?
            .ok_or_else(|| PreconfigError::UnlinkedGlobalPort {
                port: module_port.name.clone(),
            })?;
        let circuit_port = ctx.circuit_lib.port(linked);
        if module_port.width() != circuit_port.size {
            return Err(PreconfigError::GlobalPortWidthMismatch {
                port: module_port.name.clone(),
                module_width: module_port.width(),
                circuit_size: circuit_port.size,
            });
        }

        if circuit_port.port_type == CircuitPortType::Clock && !circuit_port.is_prog {
            // Every clock pin sees every benchmark clock.
            for pin in module_port.pins() {
                for clock in clock_names {
                    emitter.connect(&module_port.select(pin), &ctx.benchmark_port(clock))?;
                }
            }
            continue;
        }

        let value = circuit_port.default_value == 1;
        for pin in module_port.pins() {
            emitter.constant(&module_port.select(pin), &[value])?;
        }
    }

    emitter.comment("----- End Connect Global ports of FPGA top module -----")?;
    emitter.blank_line()?;
    Ok(())
}

/// Wires each benchmark I/O to the pad it was placed on and ties every
/// other pad to the unused-I/O constant.
pub fn connect_ios(
    emitter: &mut dyn NetlistEmitter,
    ctx: &PreconfigContext<'_>,
    top_module: ModuleId,
) -> Result<(), PreconfigError> {
    let gpio_ports = ctx.modules.module_ports_by_type(top_module, ModulePortType::Gpio);
    let [io_port] = gpio_ports.as_slice() else {
        return Err(PreconfigError::GpioPortCount(gpio_ports.len()));
    };
    let mut io_used = vec![false; io_port.width()];

    emitter.comment("----- Link Benchmark I/Os to FPGA I/Os -----")?;
    for block in ctx.blocks.iter().filter(|b| b.is_io()) {
        let io_index = ctx
            .placement
            .io_index(block)
            .ok_or_else(|| PreconfigError::UnplacedIo(block.name.clone()))?;
        if io_index >= io_port.width() {
            return Err(PreconfigError::IoIndexOutOfRange {
                block: block.name.clone(),
                index: io_index,
                width: io_port.width(),
            });
        }

        let pad = io_port.select(io_port.lsb + io_index);
        let benchmark_port = ctx.benchmark_port(&block.name);
        emitter.comment(&format!(
            "----- Benchmark I/O {} is mapped to FPGA IOPAD {}[{}] -----",
            block.name, io_port.name, io_index
        ))?;
        match block.kind {
            LogicalBlockKind::OutPad => emitter.connect(&benchmark_port, &pad)?,
            _ => emitter.connect(&pad, &benchmark_port)?,
        }
        io_used[io_index] = true;
    }
    emitter.blank_line()?;

    emitter.comment("----- Wire unused FPGA I/Os to constants -----")?;
    let value = ctx.verilog.unused_io_value == 1;
    for (io_index, _) in io_used.iter().enumerate().filter(|(_, used)| !**used) {
        emitter.constant(&io_port.select(io_port.lsb + io_index), &[value])?;
    }
    emitter.blank_line()?;
    Ok(())
}

/// Forces every configuration memory output to its bitstream value, one
/// bit at a time, in load order.
pub fn load_bitstream(
    emitter: &mut dyn NetlistEmitter,
    ctx: &PreconfigContext<'_>,
    top_module: ModuleId,
) -> Result<(), PreconfigError> {
    let naming = PathNaming {
        instance_name: &ctx.naming.instance_name,
        separator: &ctx.naming.hierarchy_separator,
        data_out: &ctx.naming.config_chain_tail,
    };
    let top_name = ctx.modules.module_name(top_module);

    emitter.comment("----- Begin load bitstream to configuration memories -----")?;
    for &bit in ctx.fabric_bitstream {
        let port = config_bit_port(ctx.bitstream, bit, top_name, &naming)?;
        emitter.constant(&port, &[ctx.bitstream.bit_value(bit)])?;
    }
    emitter.comment("----- End load bitstream to configuration memories -----")?;
    Ok(())
}

fn print_module_ports(
    emitter: &mut dyn NetlistEmitter,
    ctx: &PreconfigContext<'_>,
) -> Result<(), PreconfigError> {
    let ports: Vec<(PortDirection, BasicPort)> = ctx
        .blocks
        .iter()
        .filter_map(|block| {
            let direction = match block.kind {
                LogicalBlockKind::InPad => PortDirection::Input,
                LogicalBlockKind::OutPad => PortDirection::Output,
                LogicalBlockKind::Other => return None,
            };
            let name = format!("{}{}", block.name, ctx.naming.port_postfix);
            Some((direction, BasicPort::new(name, 1)))
        })
        .collect();
    emitter.module_begin(&ctx.wrapper_name(), &ports)?;
    Ok(())
}

fn print_internal_wires(
    emitter: &mut dyn NetlistEmitter,
    ctx: &PreconfigContext<'_>,
    top_module: ModuleId,
) -> Result<(), PreconfigError> {
    let groups = [
        (ModulePortType::Global, "----- Global ports of FPGA fabric -----"),
        (ModulePortType::Gpio, "----- I/Os of FPGA fabric -----"),
        (ModulePortType::Input, "----- Configuration protocols of FPGA fabric -----"),
    ];
    for (port_type, banner) in groups {
        emitter.comment(banner)?;
        for port in ctx.modules.module_ports_by_type(top_module, port_type) {
            emitter.wire(&port)?;
        }
        emitter.blank_line()?;
    }
    Ok(())
}

fn print_top_instance(
    emitter: &mut dyn NetlistEmitter,
    ctx: &PreconfigContext<'_>,
    top_module: ModuleId,
) -> Result<(), PreconfigError> {
    emitter.comment("----- FPGA top-level module to be capsulated -----")?;
    let ports: Vec<BasicPort> = ctx
        .modules
        .module_ports(top_module)
        .iter()
        .map(|p| p.port.clone())
        .collect();
    emitter.instance(
        ctx.modules.module_name(top_module),
        &ctx.naming.instance_name,
        &ports,
    )?;
    emitter.blank_line()?;
    Ok(())
}

/// Emits the whole pre-configured top module.
pub fn print_preconfig_top_module(
    emitter: &mut dyn NetlistEmitter,
    ctx: &PreconfigContext<'_>,
) -> Result<(), PreconfigError> {
    emitter.file_header(&format!(
        "Verilog netlist for pre-configured FPGA fabric by design: {}",
        ctx.circuit_name
    ))?;
    for path in ctx.verilog.include_paths() {
        emitter.include(&path)?;
    }
    emitter.blank_line()?;

    print_module_ports(emitter, ctx)?;

    let top_module = ctx.top_module()?;
    print_internal_wires(emitter, ctx, top_module)?;
    print_top_instance(emitter, ctx, top_module)?;

    let clock_names = benchmark_clock_names(ctx.blocks);
    connect_global_ports(emitter, ctx, top_module, &clock_names)?;
    connect_ios(emitter, ctx, top_module)?;
    load_bitstream(emitter, ctx, top_module)?;

    emitter.module_end(&ctx.wrapper_name())?;
    Ok(())
}

/// Writes the pre-configured top module as Verilog to `path`.
pub fn write_preconfig_top_module(
    path: &Path,
    ctx: &PreconfigContext<'_>,
) -> Result<(), PreconfigError> {
    log::info!(
        "Writing pre-configured FPGA top-level Verilog netlist for design {}...",
        ctx.circuit_name
    );
    let start = Instant::now();

    let mut writer = VerilogWriter::new(BufWriter::new(File::create(path)?));
    print_preconfig_top_module(&mut writer, ctx)?;
    writer.flush()?;

    log::info!("took {:.3} seconds", start.elapsed().as_secs_f64());
    Ok(())
}
