//! Line buffers and row addresses
//!
//! Provides the fixed-width line buffer written to the controller.

/// Number of character columns on the display
pub const LCD_COLS: usize = 16;

/// Number of character rows on the display
pub const LCD_ROWS: usize = 2;

/// UTF-8 capacity for one line of text before it is laid out
pub const LINE_BYTES: usize = LCD_COLS * 4;

/// Byte written for characters the controller ROM cannot show
const REPLACEMENT: u8 = b'?';

/// Display row, by DDRAM base address
///
/// Rows 3 and 4 exist on 20x4 modules sharing the same controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Line {
    One = 0x80,
    Two = 0xC0,
    Three = 0x94,
    Four = 0xD4,
}

impl Line {
    /// "Set DDRAM address" command byte for the start of this row
    #[inline]
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Row from a zero-based index
    pub const fn from_index(row: usize) -> Option<Self> {
        match row {
            0 => Some(Line::One),
            1 => Some(Line::Two),
            2 => Some(Line::Three),
            3 => Some(Line::Four),
            _ => None,
        }
    }
}

/// One display line: exactly [`LCD_COLS`] bytes, left-justified, space-padded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLine {
    bytes: [u8; LCD_COLS],
}

impl DisplayLine {
    /// Lay out text on a line
    ///
    /// Characters past the line width are dropped. ASCII (including the
    /// custom glyph codes 0x00-0x07) maps to itself, anything else to `?`.
    pub fn new(text: &str) -> Self {
        let mut bytes = [b' '; LCD_COLS];
        for (slot, ch) in bytes.iter_mut().zip(text.chars()) {
            *slot = if ch.is_ascii() { ch as u8 } else { REPLACEMENT };
        }
        Self { bytes }
    }

    /// Blank line
    pub const fn blank() -> Self {
        Self {
            bytes: [b' '; LCD_COLS],
        }
    }

    /// Bytes in controller character codes
    pub fn as_bytes(&self) -> &[u8; LCD_COLS] {
        &self.bytes
    }
}

impl Default for DisplayLine {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayLine {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DisplayLine({=[u8]})", &self.bytes[..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_addresses() {
        assert_eq!(Line::One.address(), 0x80);
        assert_eq!(Line::Two.address(), 0xC0);
        assert_eq!(Line::Three.address(), 0x94);
        assert_eq!(Line::Four.address(), 0xD4);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Line::from_index(0), Some(Line::One));
        assert_eq!(Line::from_index(3), Some(Line::Four));
        assert_eq!(Line::from_index(4), None);
    }

    #[test]
    fn test_short_text_is_padded() {
        let line = DisplayLine::new("Hi");
        assert_eq!(line.as_bytes(), b"Hi              ");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let line = DisplayLine::new("\u{0}12,50 crème brûlée");
        assert_eq!(line.as_bytes(), b"\x0012,50 cr?me br?");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let line = DisplayLine::new("Wooden puzzle box, large");
        assert_eq!(line.as_bytes(), b"Wooden puzzle bo");
    }

    #[test]
    fn test_glyph_code_passes_through() {
        let line = DisplayLine::new("\u{0}12,50");
        assert_eq!(line.as_bytes()[0], 0x00);
        assert_eq!(&line.as_bytes()[1..6], b"12,50");
    }

    #[test]
    fn test_non_ascii_is_replaced() {
        // Width counts characters, not UTF-8 bytes
        let line = DisplayLine::new("Café au lait");
        assert_eq!(line.as_bytes(), b"Caf? au lait    ");
    }

    #[test]
    fn test_blank() {
        assert_eq!(DisplayLine::blank().as_bytes(), &[b' '; LCD_COLS]);
        assert_eq!(DisplayLine::new(""), DisplayLine::blank());
    }
}
