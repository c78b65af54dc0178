//! Configuration types
//!
//! Board-agnostic configuration structures, optionally loaded from TOML.

pub mod types;

pub use types::*;
