//! Core data types for semreg.
//!
//! This crate defines the values the resolver works on: canonicalized
//! semantic versions, contract addresses, the fixed set of contract roles,
//! per-role version sets, role bundles for a scope, the target version spec
//! and the registry document that ties global and network scopes together.
//!
//! This crate is intentionally free of async code and network I/O.

/// Default file name of the registry document.
pub const REGISTRY_FILE_NAME: &str = "semreg.toml";

pub mod address;
pub mod bundle;
pub mod registry;
pub mod role;
pub mod targets;
pub mod version;
pub mod version_set;
