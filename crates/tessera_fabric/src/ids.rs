//! Opaque ID newtypes for fabric entities.

tessera_common::define_id!(
    /// ID of a module in the [`ModuleManager`](crate::ModuleManager).
    ModuleId
);

tessera_common::define_id!(
    /// ID of a configuration block.
    ConfigBlockId
);

tessera_common::define_id!(
    /// ID of a configuration bit, unique across the whole bitstream.
    ConfigBitId
);
