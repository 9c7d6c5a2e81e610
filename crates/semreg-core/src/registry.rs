//! The registry document: target versions plus global and per-network
//! implementations.
//!
//! ```toml
//! [versions]
//! l1_cross_domain_messenger = "1.7.1"
//!
//! [implementations.l1_cross_domain_messenger]
//! "1.7.1" = "0x5d5a095665886119693f0b41d8dfee78da033e8b"
//!
//! [networks.sepolia.l1_cross_domain_messenger]
//! "v1.6.0" = "0xd3494713a5cfad3f5359379dfa074e2ac8c6fd65"
//! ```
//!
//! A loaded [`Registry`] is immutable. Merged views for a network are
//! produced as fresh copies, so the global scope is never modified.
//!
//! Network entries replace global entries stored under the same key. Keys are
//! compared as written: a network `"v1.0.0"` sits next to a global `"1.0.0"`
//! instead of replacing it, and lookups prefer the unprefixed spelling. Use
//! one spelling per version across scopes.

use std::collections::BTreeMap;
use std::path::Path;

use semreg_util::errors::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

use crate::bundle::RoleBundle;
use crate::targets::TargetVersionSpec;

/// A loaded registry document.
///
/// Deserialization goes through [`Registry::new`], so a `Registry` always
/// carries validated target versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RegistryDocument")]
pub struct Registry {
    versions: TargetVersionSpec,
    implementations: RoleBundle,
    networks: BTreeMap<String, RoleBundle>,
}

/// Raw, unvalidated form of the registry document.
#[derive(Debug, Deserialize)]
struct RegistryDocument {
    versions: TargetVersionSpec,

    #[serde(default)]
    implementations: RoleBundle,

    #[serde(default)]
    networks: BTreeMap<String, RoleBundle>,
}

impl TryFrom<RegistryDocument> for Registry {
    type Error = RegistryError;

    fn try_from(doc: RegistryDocument) -> Result<Self, Self::Error> {
        Registry::new(doc.versions, doc.implementations, doc.networks)
    }
}

impl Registry {
    /// Build a registry from already-parsed parts, validating the targets.
    pub fn new(
        versions: TargetVersionSpec,
        implementations: RoleBundle,
        networks: BTreeMap<String, RoleBundle>,
    ) -> RegistryResult<Self> {
        versions.check()?;
        Ok(Self {
            versions,
            implementations,
            networks,
        })
    }

    /// Load and parse a registry document from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a registry document from a string and validate its targets.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        let doc: RegistryDocument = toml::from_str(content).map_err(|e| RegistryError::Config {
            message: format!("Failed to parse registry: {e}"),
        })?;
        let registry = Registry::try_from(doc)?;
        tracing::debug!(
            "Loaded registry with {} network override(s)",
            registry.networks.len()
        );
        Ok(registry)
    }

    /// The validated target version of every role.
    pub fn targets(&self) -> &TargetVersionSpec {
        &self.versions
    }

    /// Implementations shared by every network.
    pub fn global(&self) -> &RoleBundle {
        &self.implementations
    }

    /// Network-specific implementations, if the network is known.
    pub fn network(&self, name: &str) -> Option<&RoleBundle> {
        self.networks.get(name)
    }

    /// Names of all configured networks, sorted.
    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// The effective implementations for `network`: the global scope with
    /// the network's entries merged over it. `None` yields the global scope.
    pub fn implementations(&self, network: Option<&str>) -> RegistryResult<RoleBundle> {
        match network {
            None => Ok(self.implementations.clone()),
            Some(name) => {
                let overrides = self.network(name).ok_or_else(|| RegistryError::UnknownNetwork {
                    name: name.to_string(),
                })?;
                Ok(self.implementations.merged(overrides))
            }
        }
    }
}
