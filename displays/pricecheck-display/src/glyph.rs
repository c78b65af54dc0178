//! Custom glyphs for character-generator RAM

/// Number of CGRAM slots on the controller
pub const GLYPH_SLOTS: u8 = 8;

/// Rows in a 5x8 glyph
pub const GLYPH_ROWS: usize = 8;

/// User-defined 5x8 character
///
/// Each row uses the low five bits, bit 4 being the leftmost dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CustomGlyph {
    /// CGRAM slot (0-7), also the character code that shows it
    pub slot: u8,
    /// Dot rows, top to bottom
    pub bitmap: [u8; GLYPH_ROWS],
}

impl CustomGlyph {
    /// Create a glyph for a slot
    pub const fn new(slot: u8, bitmap: [u8; GLYPH_ROWS]) -> Self {
        Self { slot, bitmap }
    }

    /// Character code that displays this glyph
    pub const fn code(&self) -> char {
        self.slot as char
    }
}

/// Euro sign, missing from the controller's A00 ROM
pub const EURO: CustomGlyph = CustomGlyph::new(
    0,
    [0x00, 0x06, 0x09, 0x1C, 0x08, 0x1C, 0x09, 0x06],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euro_fits_5_dots() {
        assert!(EURO.bitmap.iter().all(|&row| row < 0x20));
        assert_eq!(EURO.code(), '\u{0}');
    }
}
