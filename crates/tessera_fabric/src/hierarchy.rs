//! Hierarchical names of configuration bits.
//!
//! A bit stored in block `b` is driven through the configuration-chain
//! output of `b`'s memory, so its hierarchical name is the instance path
//! from the top of the fabric down to `b`, followed by the name of that
//! output, indexed by the bit's position in `b`:
//!
//! ```text
//! U0_formal_verification.grid_clb_1_1.logical_tile_0.ccff_tail[3]
//! ```

use crate::bitstream::BitstreamManager;
use crate::error::FabricError;
use crate::ids::{ConfigBitId, ConfigBlockId};
use crate::port::BasicPort;

/// Names used when building a hierarchical bit path.
#[derive(Debug, Clone, Copy)]
pub struct PathNaming<'a> {
    /// Replaces the root block, which is the fabric top module, in the path.
    pub instance_name: &'a str,
    /// Placed between instance names.
    pub separator: &'a str,
    /// Name of the memory output carrying the bits of a block.
    pub data_out: &'a str,
}

/// Returns the ancestor chain of `block`, root first, ending with `block`.
pub fn block_hierarchy(bitstream: &BitstreamManager, block: ConfigBlockId) -> Vec<ConfigBlockId> {
    let mut chain = vec![block];
    let mut current = block;
    while let Some(parent) = bitstream.block_parent(current) {
        chain.push(parent);
        current = parent;
    }
    chain.reverse();
    chain
}

/// Returns the instance path of `block`, with the root replaced by the
/// instance name.
///
/// Fails if the root block is not named `top_name`.
pub fn block_path(
    bitstream: &BitstreamManager,
    block: ConfigBlockId,
    top_name: &str,
    naming: &PathNaming<'_>,
) -> Result<String, FabricError> {
    let chain = block_hierarchy(bitstream, block);
    let root_name = bitstream.block_name(chain[0]);
    if root_name != top_name {
        return Err(FabricError::HierarchyRootMismatch {
            expected: top_name.to_string(),
            found: root_name.to_string(),
        });
    }

    let mut path = naming.instance_name.to_string();
    for &ancestor in &chain[1..] {
        path.push_str(naming.separator);
        path.push_str(bitstream.block_name(ancestor));
    }
    Ok(path)
}

/// Returns the single-pin port a configuration bit must be forced onto.
pub fn config_bit_port(
    bitstream: &BitstreamManager,
    bit: ConfigBitId,
    top_name: &str,
    naming: &PathNaming<'_>,
) -> Result<BasicPort, FabricError> {
    let block = bitstream.bit_parent_block(bit);
    let mut name = block_path(bitstream, block, top_name, naming)?;
    name.push_str(naming.separator);
    name.push_str(naming.data_out);
    Ok(BasicPort::pin(name, bitstream.bit_index_in_parent_block(bit)))
}
