//! Handler for `semreg versions`.

use std::path::Path;

use miette::Result;
use semreg_core::role::Role;
use semreg_util::errors::RegistryError;

pub fn exec(path: &Path, role: &str, network: Option<&str>) -> Result<()> {
    let role = Role::from_str(role).ok_or_else(|| RegistryError::Config {
        message: format!("Unknown contract role '{role}'"),
    })?;
    let registry = super::load(path)?;
    let bundle = registry.implementations(network)?;
    let set = bundle.get(role);

    if set.is_empty() {
        println!("No implementations of {role}.");
        return Ok(());
    }

    println!("{role} (target {}):", registry.targets().get(role));
    for version in set.versions() {
        match set.get(&version) {
            Some(address) => println!("  {version:<14} {address}"),
            None => println!("  {version}"),
        }
    }
    Ok(())
}
