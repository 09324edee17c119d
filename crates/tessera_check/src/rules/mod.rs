//! Built-in circuit-library rules.
//!
//! [`register_builtin_rules`] registers them in the order their diagnostics
//! are reported.

mod e101;
mod e102;
mod e103;
mod e104;
mod e201;
mod e202;
mod e301;
mod e401;

pub use e101::UniqueModelNames;
pub use e102::UniqueModelPrefixes;
pub use e103::GlobalPortsAreInputs;
pub use e104::SetResetAreGlobal;
pub use e201::RequiredModel;
pub use e202::ConfigMemoryPresent;
pub use e301::RequiredPortTypes;
pub use e401::PortCountAndSize;

use crate::helpers::PortRequirement;
use crate::LibraryChecker;
use tessera_circuit::CircuitModelType;
use tessera_circuit::CircuitPortType::{Bl, Clock, InOut, Input, Output, Sram, Wl};
use tessera_config::CheckConfig;

/// Registers all built-in rules with the checker.
pub fn register_builtin_rules(checker: &mut LibraryChecker, config: &CheckConfig) {
    checker.register(Box::new(UniqueModelNames));
    checker.register(Box::new(UniqueModelPrefixes));
    checker.register(Box::new(GlobalPortsAreInputs));
    checker.register(Box::new(SetResetAreGlobal));

    checker.register(Box::new(RequiredModel::new(CircuitModelType::IoPad)));
    checker.register(Box::new(RequiredPortTypes::new(
        CircuitModelType::IoPad,
        &[Input, Output, InOut, Sram],
    )));
    checker.register(Box::new(RequiredModel::new(CircuitModelType::Mux)));
    checker.register(Box::new(RequiredPortTypes::new(
        CircuitModelType::Mux,
        &[Input, Output, Sram],
    )));

    checker.register(Box::new(ConfigMemoryPresent));
    checker.register(Box::new(RequiredPortTypes::new(
        CircuitModelType::Sram,
        &[Input, Output],
    )));
    checker.register(Box::new(RequiredPortTypes::new(
        CircuitModelType::Scff,
        &[Clock, Input, Output],
    )));
    checker.register(Box::new(RequiredPortTypes::new(
        CircuitModelType::Ff,
        &[Clock, Input, Output],
    )));
    checker.register(Box::new(RequiredPortTypes::new(
        CircuitModelType::Lut,
        &[Sram, Input, Output],
    )));

    let mut sram = vec![PortRequirement::local(Output, 1, 2)];
    if config.check_blwl {
        sram.push(PortRequirement::local(Bl, 1, 1));
        sram.push(PortRequirement::local(Wl, 1, 1));
    }
    checker.register(Box::new(PortCountAndSize::new(CircuitModelType::Sram, sram)));
    checker.register(Box::new(PortCountAndSize::new(
        CircuitModelType::Scff,
        vec![
            PortRequirement::local(Input, 1, 1),
            PortRequirement::with_global(Clock, 1, 1),
            PortRequirement::local(Output, 2, 1),
        ],
    )));
    // D, set and reset.
    checker.register(Box::new(PortCountAndSize::new(
        CircuitModelType::Ff,
        vec![
            PortRequirement::local(Input, 3, 1),
            PortRequirement::local(Clock, 1, 1),
            PortRequirement::local(Output, 1, 1),
        ],
    )));
}
