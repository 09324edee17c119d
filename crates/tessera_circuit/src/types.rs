//! Circuit model and circuit port type tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of primitive a circuit model describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircuitModelType {
    /// A routing channel wire segment.
    #[serde(rename = "CHAN_WIRE")]
    ChanWire,
    /// A local wire inside a block.
    #[serde(rename = "WIRE")]
    Wire,
    /// A routing multiplexer.
    #[serde(rename = "MUX")]
    Mux,
    /// A look-up table.
    #[serde(rename = "LUT")]
    Lut,
    /// A datapath flip-flop.
    #[serde(rename = "FF")]
    Ff,
    /// A configuration memory cell.
    #[serde(rename = "SRAM")]
    Sram,
    /// A hard IP block.
    #[serde(rename = "HARDLOGIC")]
    HardLogic,
    /// A scan-chain (configuration chain) flip-flop.
    #[serde(rename = "SCFF")]
    Scff,
    /// A fabric I/O pad.
    #[serde(rename = "IOPAD")]
    IoPad,
    /// An inverter or buffer.
    #[serde(rename = "INVBUF")]
    InvBuf,
    /// A pass-gate or transmission gate.
    #[serde(rename = "PASSGATE")]
    PassGate,
    /// A standard logic gate.
    #[serde(rename = "GATE")]
    Gate,
}

impl CircuitModelType {
    /// Returns the upper-case name used in architecture files and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            CircuitModelType::ChanWire => "CHAN_WIRE",
            CircuitModelType::Wire => "WIRE",
            CircuitModelType::Mux => "MUX",
            CircuitModelType::Lut => "LUT",
            CircuitModelType::Ff => "FF",
            CircuitModelType::Sram => "SRAM",
            CircuitModelType::HardLogic => "HARDLOGIC",
            CircuitModelType::Scff => "SCFF",
            CircuitModelType::IoPad => "IOPAD",
            CircuitModelType::InvBuf => "INVBUF",
            CircuitModelType::PassGate => "PASSGATE",
            CircuitModelType::Gate => "GATE",
        }
    }
}

impl fmt::Display for CircuitModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural role of a circuit port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CircuitPortType {
    /// A data input.
    Input,
    /// A data output.
    Output,
    /// A bidirectional pad connection.
    InOut,
    /// A clock input.
    Clock,
    /// A configuration-memory input.
    Sram,
    /// A memory bit line.
    Bl,
    /// An inverted memory bit line.
    Blb,
    /// A memory word line.
    Wl,
    /// An inverted memory word line.
    Wlb,
}

impl CircuitPortType {
    /// Returns the upper-case name used in architecture files and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            CircuitPortType::Input => "INPUT",
            CircuitPortType::Output => "OUTPUT",
            CircuitPortType::InOut => "INOUT",
            CircuitPortType::Clock => "CLOCK",
            CircuitPortType::Sram => "SRAM",
            CircuitPortType::Bl => "BL",
            CircuitPortType::Blb => "BLB",
            CircuitPortType::Wl => "WL",
            CircuitPortType::Wlb => "WLB",
        }
    }

    /// Returns `true` if signals only flow into the model through this port.
    ///
    /// Clock, memory and bit/word-line ports count as inputs; `OUTPUT` and
    /// `INOUT` do not.
    pub fn is_input(self) -> bool {
        !matches!(self, CircuitPortType::Output | CircuitPortType::InOut)
    }
}

impl fmt::Display for CircuitPortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
