//! hexcraft-core
//!
//! Core library for an educational toy that "translates" C or assembly
//! snippets into hexadecimal machine code, a matching pseudo-assembly
//! listing, and binary-digit renderings.
//!
//! Nothing here compiles anything. Machine code comes from substring
//! matches against fixed pattern tables, with random bytes for lines that
//! match nothing; assembly comes from per-architecture templates. All
//! substantive logic lives in this crate so frontends stay thin.

pub mod catalog;
pub mod config;
pub mod model;
pub mod services;
pub mod tables;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
