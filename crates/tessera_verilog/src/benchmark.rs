//! Benchmark design I/Os and their placement on fabric pads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a logical block of the packed benchmark is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalBlockKind {
    /// A primary input.
    #[serde(rename = "INPAD")]
    InPad,
    /// A primary output.
    #[serde(rename = "OUTPAD")]
    OutPad,
    /// Any internal block.
    #[serde(rename = "OTHER")]
    Other,
}

/// A logical block of the benchmark design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalBlock {
    /// Block name; for pads, the benchmark signal name.
    pub name: String,
    /// Block kind.
    pub kind: LogicalBlockKind,
    /// Whether this input drives clock pins.
    #[serde(default)]
    pub is_clock: bool,
}

impl LogicalBlock {
    /// Creates a block that is not a clock.
    pub fn new(name: impl Into<String>, kind: LogicalBlockKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_clock: false,
        }
    }

    /// Creates a clock input.
    pub fn clock(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: LogicalBlockKind::InPad,
            is_clock: true,
        }
    }

    /// Returns `true` for primary inputs and outputs.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, LogicalBlockKind::InPad | LogicalBlockKind::OutPad)
    }
}

/// Returns the names of the benchmark clocks, in block order.
pub fn benchmark_clock_names(blocks: &[LogicalBlock]) -> Vec<String> {
    blocks
        .iter()
        .filter(|b| b.kind == LogicalBlockKind::InPad && b.is_clock)
        .map(|b| b.name.clone())
        .collect()
}

/// Where benchmark I/Os were placed.
pub trait IoPlacement {
    /// Returns the index of the fabric pad `block` was placed on, if any.
    fn io_index(&self, block: &LogicalBlock) -> Option<usize>;
}

/// An [`IoPlacement`] backed by an explicit name-to-pad table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PadMap {
    pads: HashMap<String, usize>,
}

impl PadMap {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the I/O named `name` on pad `index`.
    pub fn insert(&mut self, name: impl Into<String>, index: usize) {
        self.pads.insert(name.into(), index);
    }

    /// Returns the number of placed I/Os.
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    /// Returns `true` if nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for PadMap {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut map = PadMap::new();
        for (name, index) in iter {
            map.insert(name, index);
        }
        map
    }
}

impl IoPlacement for PadMap {
    fn io_index(&self, block: &LogicalBlock) -> Option<usize> {
        self.pads.get(&block.name).copied()
    }
}

/// JSON description of a placed benchmark.
///
/// ```json
/// { "name": "and2",
///   "blocks": [ { "name": "a", "kind": "INPAD", "pad": 0 },
///               { "name": "c", "kind": "OUTPAD", "pad": 3 } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkDescription {
    /// Design name.
    pub name: String,
    /// Logical blocks in netlist order.
    pub blocks: Vec<BlockPlacement>,
}

/// A logical block plus the pad it was placed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockPlacement {
    /// The block.
    #[serde(flatten)]
    pub block: LogicalBlock,
    /// Pad index for placed I/Os.
    #[serde(default)]
    pub pad: Option<usize>,
}

impl BenchmarkDescription {
    /// Splits the description into the block list and the placement table.
    pub fn into_parts(self) -> (Vec<LogicalBlock>, PadMap) {
        let mut pads = PadMap::new();
        let mut blocks = Vec::with_capacity(self.blocks.len());
        for placed in self.blocks {
            if let Some(index) = placed.pad {
                pads.insert(placed.block.name.clone(), index);
            }
            blocks.push(placed.block);
        }
        (blocks, pads)
    }
}
