use anyhow::{anyhow, Context, Result};
use bind::{Interp, Package};
use log::debug;

use crate::config::Config;

pub mod calc;
pub mod json;
pub mod monitor;
pub mod run;

/// Every package this host knows how to load.
pub static PACKAGES: [&Package; 3] = [&calc::CALC, &json::JSON, &monitor::MONITOR];

pub fn find_package(name: &str) -> Option<&'static Package> {
    PACKAGES.iter().copied().find(|p| p.name == name)
}

/// An interpreter with the configured packages loaded.
pub fn setup(config: &Config) -> Result<Interp> {
    let mut interp = Interp::new();
    for name in &config.packages {
        let package = find_package(name).ok_or_else(|| anyhow!("Unknown package: {name}"))?;
        interp
            .load_package(package)
            .with_context(|| format!("Failed to load package {name}"))?;
    }
    debug!("{} commands registered", interp.command_names().len());
    Ok(interp)
}
