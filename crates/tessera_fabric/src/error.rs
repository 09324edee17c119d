//! Fabric construction and lookup errors.

/// Errors from building or querying the fabric graphs.
///
/// These are consistency faults in what the fabric generator produced, not
/// user-facing diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum FabricError {
    /// The JSON fabric description could not be parsed.
    #[error("failed to parse fabric description: {0}")]
    Json(#[from] serde_json::Error),

    /// Two modules share a name.
    #[error("module `{0}` is defined more than once")]
    DuplicateModule(String),

    /// A child reference names a module that does not exist.
    #[error("module `{parent}` instantiates unknown module `{child}`")]
    UnknownModule {
        /// The instantiating module.
        parent: String,
        /// The missing module name.
        child: String,
    },

    /// A port was declared with zero width.
    #[error("port `{port}` of module `{module}` has width 0")]
    ZeroWidthPort {
        /// The owning module.
        module: String,
        /// The offending port.
        port: String,
    },

    /// A configuration bit was neither `0` nor `1`.
    #[error("configuration block `{block}` has invalid bit value `{value}`")]
    BadBitValue {
        /// The block holding the bit.
        block: String,
        /// The character found.
        value: char,
    },

    /// The root of a bit's block hierarchy is not the fabric top module.
    #[error("configuration hierarchy is rooted at `{found}`, expected top module `{expected}`")]
    HierarchyRootMismatch {
        /// The top module name.
        expected: String,
        /// The name of the root block found.
        found: String,
    },

    /// A bit reference names a block path that does not exist.
    #[error("configuration block `{0}` not found")]
    UnknownConfigBlock(String),

    /// A bit reference names a block path shared by several blocks.
    #[error("configuration block path `{0}` is ambiguous")]
    AmbiguousConfigBlock(String),

    /// A bit reference is past the end of its block.
    #[error("configuration block `{block}` has {width} bit(s), index {index} is out of range")]
    ConfigBitOutOfRange {
        /// The block path.
        block: String,
        /// The index referenced.
        index: usize,
        /// Number of bits in the block.
        width: usize,
    },

    /// A bit appears twice in the load order.
    #[error("bit {index} of configuration block `{block}` is loaded more than once")]
    DuplicateConfigBit {
        /// The block path.
        block: String,
        /// The repeated index.
        index: usize,
    },
}
