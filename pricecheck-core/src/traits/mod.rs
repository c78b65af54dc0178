//! Collaborator traits
//!
//! These traits define the interface between the scan cycle and the parts
//! of the system it does not own: the claimed USB endpoint and the product
//! catalog.

pub mod catalog;
pub mod scanner;

pub use catalog::{Product, ProductLookup};
pub use scanner::{ScannerError, ScannerInput};
