//! Resolution engine: scope merging and per-role resolution of implementation
//! addresses against a target version spec.

pub mod resolver;

pub use resolver::{resolve_bundle, resolve_effective, resolve_registry, ResolvedBundle};
