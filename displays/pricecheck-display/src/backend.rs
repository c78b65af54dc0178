//! Display backend trait
//!
//! Defines the interface screens render through.

use embedded_hal::i2c::ErrorKind;

use crate::glyph::CustomGlyph;
use crate::screen::Line;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus write failed (device gone, address not acknowledged, ...)
    Bus(ErrorKind),
    /// Glyph slot outside 0-7
    InvalidGlyphSlot(u8),
}

/// Character display backend
///
/// All operations are complete transactions: when one returns, the
/// controller is back in a consistent state or the error says it is not.
pub trait CharacterDisplay {
    /// Run the controller power-on initialization
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the display and return the cursor home
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write a full line of text, padded or truncated to the line width
    fn write_line(&mut self, line: Line, text: &str) -> Result<(), DisplayError>;

    /// Load a custom glyph into character-generator RAM
    fn define_glyph(&mut self, glyph: &CustomGlyph) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}
