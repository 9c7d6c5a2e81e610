//! Bundle resolution: pick one implementation per role, fail-fast in role order.

use std::fmt;

use semreg_core::bundle::RoleBundle;
use semreg_core::registry::Registry;
use semreg_core::role::Role;
use semreg_core::targets::TargetVersionSpec;
use semreg_core::version_set::ResolvedAddress;
use semreg_util::errors::{RegistryError, RegistryResult};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The chosen implementation of every role.
///
/// Only produced when every role resolved; there is no partial bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBundle {
    entries: [ResolvedAddress; Role::COUNT],
}

impl ResolvedBundle {
    pub fn get(&self, role: Role) -> &ResolvedAddress {
        &self.entries[role.index()]
    }

    /// Iterate roles and their resolved implementations in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &ResolvedAddress)> {
        Role::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Serialize for ResolvedBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, resolved) in self.iter() {
            map.serialize_entry(role.name(), resolved)?;
        }
        map.end()
    }
}

impl fmt::Display for ResolvedBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (role, resolved) in self.iter() {
            writeln!(
                f,
                "{:<30} {:<14} {}",
                role.name(),
                resolved.version,
                resolved.address
            )?;
        }
        Ok(())
    }
}

/// Resolve every role of an already-merged bundle.
///
/// Roles are visited in [`Role::ALL`] order and the first failure aborts,
/// wrapped in [`RegistryError::RoleResolutionFailed`].
pub fn resolve_effective(
    bundle: &RoleBundle,
    targets: &TargetVersionSpec,
) -> RegistryResult<ResolvedBundle> {
    let mut entries: [ResolvedAddress; Role::COUNT] = Default::default();
    for role in Role::ALL {
        let target = targets.get(role);
        let resolved = bundle
            .get(role)
            .resolve(target)
            .map_err(|e| e.for_role(role.name()))?;
        tracing::debug!("Resolved {role} {target} to {resolved}");
        entries[role.index()] = resolved;
    }
    Ok(ResolvedBundle { entries })
}

/// Resolve every role across the global scope and an optional network scope.
///
/// Network entries override global ones with the same version. Neither input
/// bundle is modified.
pub fn resolve_bundle(
    global: &RoleBundle,
    network: Option<&RoleBundle>,
    targets: &TargetVersionSpec,
) -> RegistryResult<ResolvedBundle> {
    match network {
        Some(network) => resolve_effective(&global.merged(network), targets),
        None => resolve_effective(global, targets),
    }
}

/// Resolve a loaded registry for `network`, or for the global scope alone.
pub fn resolve_registry(
    registry: &Registry,
    network: Option<&str>,
) -> RegistryResult<ResolvedBundle> {
    let overrides = match network {
        Some(name) => Some(
            registry
                .network(name)
                .ok_or_else(|| RegistryError::UnknownNetwork {
                    name: name.to_string(),
                })?,
        ),
        None => None,
    };
    resolve_bundle(registry.global(), overrides, registry.targets())
}
