//! Verilog text output.

use std::io::{self, Write};

use tessera_fabric::BasicPort;

use crate::emitter::{NetlistEmitter, PortDirection};

/// Writes netlists as Verilog-2001 text.
///
/// Ports are declared with ascending ranges (`[0:7]`), so a constant's
/// lowest pin is its leftmost digit.
pub struct VerilogWriter<W: Write> {
    writer: W,
}

impl<W: Write> VerilogWriter<W> {
    /// Creates a writer emitting to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying output.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flushes the underlying output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Formats the declared range of a port, e.g. `[0:7]`.
fn range(port: &BasicPort) -> String {
    format!("[{}:{}]", port.lsb, port.msb)
}

/// Formats a reference to a port: `name[i]` for one pin, `name[lsb:msb]`
/// otherwise.
fn reference(port: &BasicPort) -> String {
    if port.lsb == port.msb {
        format!("{}[{}]", port.name, port.lsb)
    } else {
        format!("{}{}", port.name, range(port))
    }
}

impl<W: Write> NetlistEmitter for VerilogWriter<W> {
    fn file_header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer, "//-------------------------------------------")?;
        writeln!(self.writer, "//\tFPGA Synthesizable Verilog Netlist")?;
        writeln!(self.writer, "//\tDescription: {title}")?;
        writeln!(self.writer, "//\tAuthor: Tessera")?;
        writeln!(self.writer, "//-------------------------------------------")?;
        writeln!(self.writer, "//----- Time scale -----")?;
        writeln!(self.writer, "`timescale 1ns / 1ps")?;
        writeln!(self.writer)
    }

    fn comment(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "// {text}")
    }

    fn include(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.writer, "`include \"{path}\"")
    }

    fn module_begin(&mut self, name: &str, ports: &[(PortDirection, BasicPort)]) -> io::Result<()> {
        writeln!(self.writer, "module {name} (")?;
        for (i, (direction, port)) in ports.iter().enumerate() {
            let keyword = match direction {
                PortDirection::Input => "input",
                PortDirection::Output => "output",
            };
            let sep = if i + 1 < ports.len() { "," } else { "" };
            writeln!(self.writer, "    {keyword} {} {}{sep}", range(port), port.name)?;
        }
        writeln!(self.writer, ");")?;
        writeln!(self.writer)
    }

    fn wire(&mut self, port: &BasicPort) -> io::Result<()> {
        writeln!(self.writer, "wire {} {};", range(port), port.name)
    }

    fn instance(&mut self, module: &str, instance: &str, ports: &[BasicPort]) -> io::Result<()> {
        writeln!(self.writer, "    {module} {instance} (")?;
        for (i, port) in ports.iter().enumerate() {
            let sep = if i + 1 < ports.len() { "," } else { "" };
            writeln!(self.writer, "        .{}({}){sep}", port.name, reference(port))?;
        }
        writeln!(self.writer, "    );")
    }

    fn connect(&mut self, sink: &BasicPort, source: &BasicPort) -> io::Result<()> {
        writeln!(self.writer, "    assign {} = {};", reference(sink), reference(source))
    }

    fn constant(&mut self, sink: &BasicPort, values: &[bool]) -> io::Result<()> {
        let digits: String = values.iter().map(|&v| if v { '1' } else { '0' }).collect();
        writeln!(
            self.writer,
            "    assign {} = {}'b{digits};",
            reference(sink),
            values.len()
        )
    }

    fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    fn module_end(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.writer, "endmodule")?;
        writeln!(self.writer, "// ----- END Verilog module for {name} -----")?;
        writeln!(self.writer)
    }
}
