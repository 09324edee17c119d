//! Opaque ID newtypes for circuit-library entities.

tessera_common::define_id!(
    /// Opaque, copyable ID of a circuit model.
    CircuitModelId
);

tessera_common::define_id!(
    /// Opaque, copyable ID of a circuit port, unique across the whole library.
    CircuitPortId
);
