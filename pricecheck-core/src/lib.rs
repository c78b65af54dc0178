//! Board-agnostic core logic for the barcode price checker
//!
//! This crate ties the scanner decoder and the display together without
//! depending on specific hardware:
//!
//! - Collaborator traits (scanner input, product lookup)
//! - Scan cycle with typed outcomes
//! - Configuration type definitions
//!
//! TOML loading sits behind the `toml` feature, and so do its tests:
//!
//! ```text
//! cargo test -p pricecheck-core --features toml
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod traits;

pub use config::{ConfigError, PriceCheckConfig};
pub use cycle::{CycleError, PriceChecker, ScanOutcome, SCAN_BUFFER_LEN};
pub use traits::{Product, ProductLookup, ScannerError, ScannerInput};
