//! Deployed implementations of a single contract role, keyed by version.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use semreg_util::errors::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::version;

/// The version and address chosen for one role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    pub version: String,
    pub address: Address,
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.version, self.address)
    }
}

/// Mapping from semantic version to deployed address.
///
/// Keys are stored in whatever prefix form they were inserted with.
/// Lookups, enumeration and resolution treat `1.2.3` and `v1.2.3` alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionSet {
    entries: BTreeMap<String, Address>,
}

impl VersionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under `version` exactly as given, returning the
    /// address previously stored under that key.
    pub fn insert(&mut self, version: impl Into<String>, address: Address) -> Option<Address> {
        self.entries.insert(version.into(), address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the address for `key` in either prefix form.
    ///
    /// The unprefixed spelling is tried first, then the prefixed one.
    pub fn get(&self, key: &str) -> Option<Address> {
        let canonical = version::canonicalize(key);
        self.entries
            .get(version::strip_prefix(&canonical))
            .or_else(|| self.entries.get(&canonical))
            .copied()
    }

    /// All versions in canonical form, ascending by precedence.
    pub fn versions(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .keys()
            .map(String::as_str)
            .map(version::canonicalize)
            .collect();
        version::sort(&mut keys);
        keys
    }

    /// Pick the implementation that satisfies `target`.
    ///
    /// An exact version match wins outright. Otherwise the highest version
    /// above `target` is chosen. Fails with [`RegistryError::EmptySet`] when
    /// there are no entries and [`RegistryError::Unresolvable`] when nothing
    /// reaches `target`.
    pub fn resolve(&self, target: &str) -> RegistryResult<ResolvedAddress> {
        if self.is_empty() {
            return Err(RegistryError::EmptySet);
        }

        let target = version::canonicalize(target);
        let wanted = version::parse(&target).ok_or_else(|| RegistryError::InvalidVersionFormat {
            field: "target".to_string(),
            version: target.clone(),
        })?;

        let mut best: Option<ResolvedAddress> = None;
        for key in self.versions() {
            let Some(candidate) = version::parse(&key) else {
                tracing::warn!("Skipping implementation with invalid version {key}");
                continue;
            };
            let Some(address) = self.get(&key) else {
                continue;
            };
            match version::cmp_precedence(&candidate, &wanted) {
                Ordering::Less => {}
                Ordering::Equal => {
                    best = Some(ResolvedAddress {
                        version: key,
                        address,
                    });
                    break;
                }
                // A later, larger qualifying version overwrites this one.
                Ordering::Greater => {
                    best = Some(ResolvedAddress {
                        version: key,
                        address,
                    });
                }
            }
        }

        best.ok_or(RegistryError::Unresolvable { target })
    }

    /// Copy every entry of `other` into `self`. Entries of `other` win on
    /// key collision; nothing is removed.
    pub fn merge(&mut self, other: &VersionSet) {
        for (key, address) in &other.entries {
            if let Some(previous) = self.entries.insert(key.clone(), *address) {
                if previous != *address {
                    tracing::trace!("Overriding {key}: {previous} -> {address}");
                }
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Address)> for VersionSet {
    fn from_iter<I: IntoIterator<Item = (K, Address)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Address); N]> for VersionSet {
    fn from(entries: [(K, Address); N]) -> Self {
        entries.into_iter().collect()
    }
}
