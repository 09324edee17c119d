//! JSON description of a generated fabric.
//!
//! ```json
//! { "modules": [
//!     { "name": "fpga_top",
//!       "ports": [ { "name": "clk", "role": "GLOBAL" },
//!                  { "name": "gfpga_pad", "role": "GPIO", "width": 8 } ],
//!       "children": ["grid_clb"] },
//!     { "name": "grid_clb" } ],
//!   "bitstream": { "name": "fpga_top", "children": [
//!     { "name": "grid_clb_1_1", "bits": "0110" } ] },
//!   "fabric_bitstream": [
//!     { "block": "fpga_top/grid_clb_1_1", "index": 3 },
//!     { "block": "fpga_top/grid_clb_1_1", "index": 2 } ] }
//! ```
//!
//! `fabric_bitstream` gives the load order explicitly, each bit named by the
//! `/`-joined path of its block from the root and its index in that block.
//! Without it, bits load in the order they appear in the block tree, walked
//! depth first: a block's own bits, then its children in order.

use crate::bitstream::BitstreamManager;
use crate::error::FabricError;
use crate::ids::{ConfigBitId, ConfigBlockId};
use crate::module::{ModuleManager, ModulePortType};
use crate::port::BasicPort;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A whole fabric: modules plus the configuration blocks and bits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FabricDescription {
    /// Modules in declaration order.
    pub modules: Vec<ModuleDescription>,
    /// Root of the configuration block tree, if the fabric has any bits.
    #[serde(default)]
    pub bitstream: Option<BlockDescription>,
    /// Explicit bit load order.
    #[serde(default)]
    pub fabric_bitstream: Option<Vec<BitReference>>,
}

/// One bit of the load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitReference {
    /// Path of the block from the root, names joined by `/`.
    pub block: String,
    /// Index of the bit among the block's bits.
    pub index: usize,
}

/// One module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDescription {
    /// Module name.
    pub name: String,
    /// Ports in declaration order.
    #[serde(default)]
    pub ports: Vec<ModulePortDescription>,
    /// Names of instantiated modules.
    #[serde(default)]
    pub children: Vec<String>,
}

fn one() -> usize {
    1
}

/// One module port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulePortDescription {
    /// Port name.
    pub name: String,
    /// Port role.
    pub role: ModulePortType,
    /// Width in pins.
    #[serde(default = "one")]
    pub width: usize,
}

/// One configuration block and everything nested in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDescription {
    /// Instance name.
    pub name: String,
    /// Bits stored in this block as a string of `0` and `1`, index 0 first.
    #[serde(default)]
    pub bits: String,
    /// Nested blocks.
    #[serde(default)]
    pub children: Vec<BlockDescription>,
}

/// The fabric graphs built from a description.
#[derive(Debug, Clone, Default)]
pub struct Fabric {
    /// Module hierarchy.
    pub modules: ModuleManager,
    /// Configuration blocks and bits.
    pub bitstream: BitstreamManager,
    /// Every bit in the order it is loaded.
    pub fabric_bitstream: Vec<ConfigBitId>,
}

impl FabricDescription {
    /// Parses a description from JSON text.
    pub fn from_json(text: &str) -> Result<Self, FabricError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the module and bitstream graphs.
    pub fn build(&self) -> Result<Fabric, FabricError> {
        let mut fabric = Fabric::default();
        self.build_modules(&mut fabric.modules)?;
        let (tree_order, paths) = match &self.bitstream {
            Some(root) => build_blocks(root, &mut fabric.bitstream)?,
            None => (Vec::new(), HashMap::new()),
        };
        fabric.fabric_bitstream = match &self.fabric_bitstream {
            Some(refs) => resolve_bit_order(refs, &paths, &fabric.bitstream)?,
            None => tree_order,
        };
        log::debug!(
            "loaded fabric with {} modules, {} configuration blocks, {} bits",
            fabric.modules.num_modules(),
            fabric.bitstream.num_blocks(),
            fabric.fabric_bitstream.len()
        );
        Ok(fabric)
    }

    fn build_modules(&self, modules: &mut ModuleManager) -> Result<(), FabricError> {
        let mut by_name = HashMap::new();
        for desc in &self.modules {
            let id = modules.add_module(&desc.name);
            if by_name.insert(desc.name.as_str(), id).is_some() {
                return Err(FabricError::DuplicateModule(desc.name.clone()));
            }
            for port in &desc.ports {
                if port.width == 0 {
                    return Err(FabricError::ZeroWidthPort {
                        module: desc.name.clone(),
                        port: port.name.clone(),
                    });
                }
                modules.add_port(id, BasicPort::new(&port.name, port.width), port.role);
            }
        }

        // Children may refer to modules declared later.
        for desc in &self.modules {
            let parent = by_name[desc.name.as_str()];
            for child_name in &desc.children {
                let child = by_name.get(child_name.as_str()).copied().ok_or_else(|| {
                    FabricError::UnknownModule {
                        parent: desc.name.clone(),
                        child: child_name.clone(),
                    }
                })?;
                modules.add_child_module(parent, child);
            }
        }
        Ok(())
    }
}

/// Block paths to blocks; `None` marks a path shared by several blocks.
type BlockPaths = HashMap<String, Option<ConfigBlockId>>;

fn build_blocks(
    root: &BlockDescription,
    bitstream: &mut BitstreamManager,
) -> Result<(Vec<ConfigBitId>, BlockPaths), FabricError> {
    let mut order = Vec::new();
    let mut paths = BlockPaths::new();
    let mut stack: Vec<(Option<(ConfigBlockId, String)>, &BlockDescription)> = vec![(None, root)];

    while let Some((parent, desc)) = stack.pop() {
        let (block, path) = match parent {
            None => (bitstream.add_block(&desc.name), desc.name.clone()),
            Some((parent, parent_path)) => (
                bitstream.add_child_block(parent, &desc.name),
                format!("{parent_path}/{}", desc.name),
            ),
        };
        for ch in desc.bits.chars() {
            let value = match ch {
                '0' => false,
                '1' => true,
                _ => {
                    return Err(FabricError::BadBitValue {
                        block: desc.name.clone(),
                        value: ch,
                    })
                }
            };
            order.push(bitstream.add_bit(block, value));
        }
        for child in desc.children.iter().rev() {
            stack.push((Some((block, path.clone())), child));
        }
        paths
            .entry(path)
            .and_modify(|seen| *seen = None)
            .or_insert(Some(block));
    }
    Ok((order, paths))
}

fn resolve_bit_order(
    refs: &[BitReference],
    paths: &BlockPaths,
    bitstream: &BitstreamManager,
) -> Result<Vec<ConfigBitId>, FabricError> {
    let mut loaded = HashSet::new();
    let mut order = Vec::with_capacity(refs.len());
    for bit_ref in refs {
        let block = match paths.get(&bit_ref.block) {
            Some(Some(block)) => *block,
            Some(None) => return Err(FabricError::AmbiguousConfigBlock(bit_ref.block.clone())),
            None => return Err(FabricError::UnknownConfigBlock(bit_ref.block.clone())),
        };
        let bits = &bitstream.block(block).bits;
        let bit = bits.get(bit_ref.index).copied().ok_or_else(|| {
            FabricError::ConfigBitOutOfRange {
                block: bit_ref.block.clone(),
                index: bit_ref.index,
                width: bits.len(),
            }
        })?;
        if !loaded.insert(bit) {
            return Err(FabricError::DuplicateConfigBit {
                block: bit_ref.block.clone(),
                index: bit_ref.index,
            });
        }
        order.push(bit);
    }
    Ok(order)
}
