//! Configuration blocks and the bits they store.
//!
//! Blocks form a forest through parent links; each block mirrors one module
//! instance of the fabric, and the root block mirrors the top module. Every
//! bit belongs to exactly one block and knows its position among that
//! block's bits, which is also its index on the block's memory output.

use crate::ids::{ConfigBitId, ConfigBlockId};
use serde::{Deserialize, Serialize};
use tessera_common::Arena;

/// A configuration block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigBlock {
    /// Instance name of the block inside its parent.
    pub name: String,
    /// The enclosing block; `None` for a root.
    pub parent: Option<ConfigBlockId>,
    /// Child blocks in creation order.
    pub children: Vec<ConfigBlockId>,
    /// Bits stored directly in this block, in index order.
    pub bits: Vec<ConfigBitId>,
}

/// A configuration bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigBit {
    /// The block storing the bit.
    pub parent_block: ConfigBlockId,
    /// Position among the bits of `parent_block`.
    pub index_in_parent: usize,
    /// Programmed value.
    pub value: bool,
}

/// Registry of configuration blocks and bits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BitstreamManager {
    blocks: Arena<ConfigBlockId, ConfigBlock>,
    bits: Arena<ConfigBitId, ConfigBit>,
}

impl BitstreamManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root block.
    pub fn add_block(&mut self, name: impl Into<String>) -> ConfigBlockId {
        self.blocks.alloc(ConfigBlock {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            bits: Vec::new(),
        })
    }

    /// Adds a block nested in `parent`.
    pub fn add_child_block(
        &mut self,
        parent: ConfigBlockId,
        name: impl Into<String>,
    ) -> ConfigBlockId {
        let child = self.blocks.alloc(ConfigBlock {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
            bits: Vec::new(),
        });
        self.blocks.get_mut(parent).children.push(child);
        child
    }

    /// Appends a bit to a block.
    pub fn add_bit(&mut self, block: ConfigBlockId, value: bool) -> ConfigBitId {
        let index_in_parent = self.blocks[block].bits.len();
        let bit = self.bits.alloc(ConfigBit {
            parent_block: block,
            index_in_parent,
            value,
        });
        self.blocks.get_mut(block).bits.push(bit);
        bit
    }

    /// Returns the number of blocks.
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of bits.
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// Iterates over every bit in creation order.
    pub fn bits(&self) -> impl Iterator<Item = ConfigBitId> + '_ {
        self.bits.ids()
    }

    /// Returns a block.
    pub fn block(&self, block: ConfigBlockId) -> &ConfigBlock {
        &self.blocks[block]
    }

    /// Returns the name of a block.
    pub fn block_name(&self, block: ConfigBlockId) -> &str {
        &self.blocks[block].name
    }

    /// Returns the parent of a block, if any.
    pub fn block_parent(&self, block: ConfigBlockId) -> Option<ConfigBlockId> {
        self.blocks[block].parent
    }

    /// Returns the block storing a bit.
    pub fn bit_parent_block(&self, bit: ConfigBitId) -> ConfigBlockId {
        self.bits[bit].parent_block
    }

    /// Returns the index of a bit among the bits of its block.
    pub fn bit_index_in_parent_block(&self, bit: ConfigBitId) -> usize {
        self.bits[bit].index_in_parent
    }

    /// Returns the programmed value of a bit.
    pub fn bit_value(&self, bit: ConfigBitId) -> bool {
        self.bits[bit].value
    }
}
