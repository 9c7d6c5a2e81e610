//! Handler for `semreg check`.

use std::path::Path;

use miette::Result;
use semreg_core::role::Role;

pub fn exec(path: &Path) -> Result<()> {
    let registry = super::load(path)?;

    println!("Registry OK: {}", path.display());
    println!("Target versions:");
    for (role, version) in registry.targets().iter() {
        println!("  {:<30} {}", role.name(), version);
    }

    let deployed: usize = Role::ALL
        .into_iter()
        .map(|role| registry.global().get(role).len())
        .sum();
    println!("Global implementations: {deployed}");

    let networks: Vec<&str> = registry.networks().collect();
    if networks.is_empty() {
        println!("Networks: none");
    } else {
        println!("Networks: {}", networks.join(", "));
    }
    Ok(())
}
