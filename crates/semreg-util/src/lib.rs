//! Shared utilities for semreg.
//!
//! This crate provides the cross-cutting pieces used by every other semreg
//! crate: the unified error type and small filesystem helpers.

pub mod errors;
pub mod fs;
