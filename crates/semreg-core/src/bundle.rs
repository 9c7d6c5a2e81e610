//! One version set per contract role for a single scope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::version_set::VersionSet;

/// The implementations of every role in one scope (global or a network).
///
/// Every role is always present. A role with no deployments is an empty
/// [`VersionSet`], so merge and resolve never need a presence check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Role, VersionSet>",
    into = "BTreeMap<Role, VersionSet>"
)]
pub struct RoleBundle {
    sets: [VersionSet; Role::COUNT],
}

impl RoleBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: Role) -> &VersionSet {
        &self.sets[role.index()]
    }

    pub fn get_mut(&mut self, role: Role) -> &mut VersionSet {
        &mut self.sets[role.index()]
    }

    /// Replace the set for `role`, builder style.
    pub fn with(mut self, role: Role, set: VersionSet) -> Self {
        self.sets[role.index()] = set;
        self
    }

    /// Iterate roles and their sets in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &VersionSet)> {
        Role::ALL.into_iter().zip(self.sets.iter())
    }

    /// Returns `true` if no role has any deployment.
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(VersionSet::is_empty)
    }

    /// Merge `other` into `self` role by role; `other` wins on conflicts.
    pub fn merge(&mut self, other: &RoleBundle) {
        for role in Role::ALL {
            self.get_mut(role).merge(other.get(role));
        }
    }

    /// A copy of `self` with `other` merged in. `self` is left untouched.
    pub fn merged(&self, other: &RoleBundle) -> RoleBundle {
        let mut out = self.clone();
        out.merge(other);
        out
    }
}

impl From<BTreeMap<Role, VersionSet>> for RoleBundle {
    fn from(mut map: BTreeMap<Role, VersionSet>) -> Self {
        let mut bundle = RoleBundle::new();
        for role in Role::ALL {
            if let Some(set) = map.remove(&role) {
                bundle.sets[role.index()] = set;
            }
        }
        bundle
    }
}

impl From<RoleBundle> for BTreeMap<Role, VersionSet> {
    fn from(bundle: RoleBundle) -> Self {
        Role::ALL.into_iter().zip(bundle.sets).collect()
    }
}
