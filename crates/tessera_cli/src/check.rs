//! `tessera check`: validate a circuit library.

use tessera_circuit::LibraryDescription;

use crate::pipeline::{build_and_check_library, load_tool_config, read_input};
use crate::{CheckArgs, GlobalArgs};

/// Runs the `tessera check` command.
///
/// Returns exit code 0 if the library passed, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut config = load_tool_config(global)?;
    if args.check_blwl {
        config.check.check_blwl = true;
    }

    if !global.quiet {
        eprintln!("   Checking {}", args.library.display());
    }

    let text = read_input(&args.library)?;
    let description = LibraryDescription::from_json(&text)?;
    let lib = build_and_check_library(&description, &config.check, args.format, global)?;

    Ok(if lib.is_some() { 0 } else { 1 })
}
