//! Character LCD support for the price checker
//!
//! This crate provides:
//! - `Hd44780` driver for HD44780-compatible controllers behind a PCF8574
//!   I2C I/O expander (the common "LCD1602 I2C backpack")
//! - `CharacterDisplay` trait so screens can target any text display
//! - `PriceFormatter` for the product, not-found and idle screens
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  PriceFormatter      │  title / price / messages
//! └──────────────────────┘
//!            │ CharacterDisplay
//!            ▼
//! ┌──────────────────────┐
//! │  Hd44780             │  commands, nibbles, enable strobes
//! └──────────────────────┘
//!            │ embedded_hal::i2c::I2c (one byte per write)
//!            ▼
//! ┌──────────────────────┐
//! │  PCF8574 → HD44780   │
//! └──────────────────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod formatter;
pub mod glyph;
pub mod hd44780;
pub mod screen;
pub mod timing;

// Re-export key types
pub use backend::{CharacterDisplay, DisplayError};
pub use formatter::{Messages, PriceFormatter, CURRENCY_PLACEHOLDER};
pub use glyph::{CustomGlyph, EURO};
pub use hd44780::{Backlight, Hd44780, LcdConfig, Mode, DEFAULT_ADDRESS};
pub use screen::{DisplayLine, Line, LCD_COLS, LCD_ROWS, LINE_BYTES};
pub use timing::Timing;
