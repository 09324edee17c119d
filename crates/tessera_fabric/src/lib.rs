//! The generated FPGA fabric as seen by the netlist writer.
//!
//! Two read-only graphs are kept here. The [`ModuleManager`] holds the
//! module hierarchy with role-tagged ports. The [`BitstreamManager`] holds
//! the configuration blocks, which mirror module instances, and the
//! configuration bits each block stores. The [`hierarchy`] module turns a
//! bit into the hierarchical name of the memory output that must carry it.
//!
//! Both graphs are normally produced by the fabric generator and loaded
//! from a JSON [`FabricDescription`].

#![warn(missing_docs)]

pub mod bitstream;
pub mod description;
pub mod error;
pub mod hierarchy;
pub mod ids;
pub mod module;
pub mod port;

pub use bitstream::{BitstreamManager, ConfigBit, ConfigBlock};
pub use description::{
    BlockDescription, Fabric, FabricDescription, ModuleDescription, ModulePortDescription,
};
pub use error::FabricError;
pub use hierarchy::{block_hierarchy, block_path, config_bit_port, PathNaming};
pub use ids::{ConfigBitId, ConfigBlockId, ModuleId};
pub use module::{ModuleManager, ModulePort, ModulePortType};
pub use port::BasicPort;
