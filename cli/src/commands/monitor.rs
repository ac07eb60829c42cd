//! `monitor`: what the interpreter currently holds.

use bind::{package, Interp, IntoValue, Value};
use std::collections::BTreeMap;
use std::error::Error as StdError;

package!(pub MONITOR = "monitor", "1.0", register);

pub fn status(interp: &Interp) -> BTreeMap<String, Value> {
    let packages: BTreeMap<String, String> = interp
        .packages()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect();
    BTreeMap::from([
        ("commands".to_string(), interp.command_names().into_value()),
        ("instances".to_string(), interp.instance_count().into_value()),
        ("packages".to_string(), packages.into_value()),
    ])
}

fn register(interp: &mut Interp) -> Result<(), Box<dyn StdError + Send + Sync>> {
    let monitor = interp.create_command("monitor");
    monitor
        .add_subcommand("status")
        .add_function_with_interp(|ip: &mut Interp| status(ip));
    monitor
        .add_subcommand("commands")
        .add_function_with_interp(|ip: &mut Interp| ip.command_names());
    monitor
        .add_subcommand("info")
        .add_function_with_interp(|ip: &mut Interp, name: String| {
            let command = ip.command(&name)?;
            Some(BTreeMap::from([
                ("overloads".to_string(), command.overloads().len().into_value()),
                (
                    "subcommands".to_string(),
                    command.subcommand_names().collect::<Vec<_>>().into_value(),
                ),
            ]))
        });
    Ok(())
}
