//! USB HID barcode scanner decoding
//!
//! Barcode scanners in keyboard-emulation mode "type" the scanned text as a
//! stream of HID boot-keyboard reports, finishing with an Enter keystroke.
//! This crate inverts that encoding back into the scanned text.
//!
//! # Report format
//!
//! ```text
//! ┌──────────┬──────────┬─────────┬─────────┬─────┬─────────┐
//! │ MODIFIER │ RESERVED │ KEY 1   │ KEY 2   │ ... │ KEY 6   │
//! │ 1B       │ 1B       │ 1B      │ 1B      │     │ 1B      │
//! └──────────┴──────────┴─────────┴─────────┴─────┴─────────┘
//! ```
//!
//! Each report decodes to at most one character. A scan is the
//! concatenation of all reports up to the Enter sentinel.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod keycode;
pub mod report;
pub mod scan;

pub use keycode::{lookup, KeycodeEntry, ENTER, SCAN_CODES};
pub use report::{decode_frame, DecodeError, ReportFrame, NO_KEY, REPORT_LEN, SHIFT_MARKER};
pub use scan::{decode_scan, ScanError, ScanResult, MAX_SCAN_LEN};
