//! The desired semantic version of every contract role.

use std::collections::BTreeMap;

use semreg_util::errors::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::version;

/// One target version per role.
///
/// Built from configuration and validated once with [`TargetVersionSpec::check`]
/// before it is used for resolution. Roles missing from the source document
/// come through as empty strings so that `check` can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Role, String>",
    into = "BTreeMap<Role, String>"
)]
pub struct TargetVersionSpec {
    versions: [String; Role::COUNT],
}

impl TargetVersionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: Role) -> &str {
        &self.versions[role.index()]
    }

    pub fn set(&mut self, role: Role, version: impl Into<String>) {
        self.versions[role.index()] = version.into();
    }

    /// Set the target for `role`, builder style.
    pub fn with(mut self, role: Role, version: impl Into<String>) -> Self {
        self.set(role, version);
        self
    }

    /// The same target version for every role.
    pub fn uniform(version: &str) -> Self {
        Role::ALL
            .into_iter()
            .fold(Self::new(), |spec, role| spec.with(role, version))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL
            .into_iter()
            .zip(self.versions.iter().map(String::as_str))
    }

    /// Check that every field is set and is a valid semantic version.
    ///
    /// Fields are checked in role order and the first problem is returned.
    pub fn check(&self) -> RegistryResult<()> {
        for (role, raw) in self.iter() {
            if raw.is_empty() {
                return Err(RegistryError::EmptyTargetField {
                    field: role.name().to_string(),
                });
            }
            let canonical = version::canonicalize(raw);
            if !version::is_valid(&canonical) {
                return Err(RegistryError::InvalidVersionFormat {
                    field: role.name().to_string(),
                    version: canonical,
                });
            }
        }
        Ok(())
    }
}

impl From<BTreeMap<Role, String>> for TargetVersionSpec {
    fn from(mut map: BTreeMap<Role, String>) -> Self {
        let mut spec = TargetVersionSpec::new();
        for role in Role::ALL {
            if let Some(version) = map.remove(&role) {
                spec.set(role, version);
            }
        }
        spec
    }
}

impl From<TargetVersionSpec> for BTreeMap<Role, String> {
    fn from(spec: TargetVersionSpec) -> Self {
        Role::ALL.into_iter().zip(spec.versions).collect()
    }
}
