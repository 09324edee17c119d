//! The netlist output interface.

use std::io;
use tessera_fabric::BasicPort;

/// Direction of a module port declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    /// `input`
    Input,
    /// `output`
    Output,
}

/// Structured netlist output.
///
/// The pre-configured top module is produced as a sequence of these calls.
/// Implementations decide the concrete syntax.
pub trait NetlistEmitter {
    /// Writes the file banner.
    fn file_header(&mut self, title: &str) -> io::Result<()>;

    /// Writes a one-line comment.
    fn comment(&mut self, text: &str) -> io::Result<()>;

    /// Writes an include directive for another netlist file.
    fn include(&mut self, path: &str) -> io::Result<()>;

    /// Opens a module with the given ports.
    fn module_begin(&mut self, name: &str, ports: &[(PortDirection, BasicPort)]) -> io::Result<()>;

    /// Declares a wire covering `port`.
    fn wire(&mut self, port: &BasicPort) -> io::Result<()>;

    /// Instantiates `module` as `instance`, mapping every port to the wire of
    /// the same name by explicit port mapping.
    fn instance(&mut self, module: &str, instance: &str, ports: &[BasicPort]) -> io::Result<()>;

    /// Drives `sink` from `source`. Both have the same width.
    fn connect(&mut self, sink: &BasicPort, source: &BasicPort) -> io::Result<()>;

    /// Drives `sink` with constant bits, one per pin, lowest pin first.
    fn constant(&mut self, sink: &BasicPort, values: &[bool]) -> io::Result<()>;

    /// Writes an empty separator line.
    fn blank_line(&mut self) -> io::Result<()>;

    /// Closes the module `name`.
    fn module_end(&mut self, name: &str) -> io::Result<()>;
}
