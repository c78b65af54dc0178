//! HD44780 LCD Driver
//!
//! Driver for HD44780-compatible character LCDs wired to a PCF8574 I2C I/O
//! expander in 4-bit mode. Every expander write sets all eight lines at once:
//!
//! ```text
//! bit:  7   6   5   4   3   2   1   0
//!      D7  D6  D5  D4  BL  E   RW  RS
//! ```
//!
//! A nibble is committed by strobing E. Each nibble costs three bus writes
//! (E low, E high, E low) with the configured settle and pulse delays.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};

use crate::backend::{CharacterDisplay, DisplayError};
use crate::glyph::{CustomGlyph, GLYPH_SLOTS};
use crate::screen::{DisplayLine, Line, LCD_COLS, LCD_ROWS};
use crate::timing::Timing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// PCF8574 backpack address with A0-A2 pulled high
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Expander output bits
mod bits {
    pub const REGISTER_SELECT: u8 = 0x01;
    pub const ENABLE: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// HD44780 commands
mod cmd {
    /// Two 8-bit function sets, forcing a known state after power-on
    pub const RESET_8BIT: u8 = 0x33;
    /// Third 8-bit function set, then switch to 4-bit
    pub const RESET_4BIT: u8 = 0x32;
    /// Entry mode: increment cursor, no shift
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// 4-bit bus, two lines, 5x8 font
    pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
    pub const CLEAR: u8 = 0x01;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
}

/// Power-on initialization, in the order the controller requires
const INIT_SEQUENCE: [u8; 6] = [
    cmd::RESET_8BIT,
    cmd::RESET_4BIT,
    cmd::ENTRY_MODE_INCREMENT,
    cmd::DISPLAY_ON,
    cmd::FUNCTION_SET_4BIT_2LINE,
    cmd::CLEAR,
];

/// Register selected by the RS line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Instruction register
    Command = 0,
    /// Data register (DDRAM or CGRAM)
    Character = bits::REGISTER_SELECT,
}

/// Backlight state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Backlight {
    Off = 0x00,
    #[default]
    On = bits::BACKLIGHT,
}

impl From<bool> for Backlight {
    fn from(on: bool) -> Self {
        if on {
            Backlight::On
        } else {
            Backlight::Off
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdConfig {
    /// 7-bit expander address
    pub address: u8,
    /// Initial backlight state
    pub backlight: Backlight,
    /// Enable strobe timing
    pub timing: Timing,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            backlight: Backlight::On,
            timing: Timing::DEFAULT,
        }
    }
}

/// HD44780 driver
///
/// Owns the bus for its whole lifetime, so a multi-nibble sequence can never
/// interleave with another writer. A failed bus write aborts the operation
/// in progress and is returned as-is; there is no retry.
pub struct Hd44780<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    backlight: Backlight,
    timing: Timing,
}

impl<I2C, D> Hd44780<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver with the default address and timing
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, LcdConfig::default())
    }

    /// Create a driver with explicit configuration
    pub fn with_config(i2c: I2C, delay: D, config: LcdConfig) -> Self {
        Self {
            i2c,
            delay,
            address: config.address,
            backlight: config.backlight,
            timing: config.timing,
        }
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Current timing
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Change the backlight
    ///
    /// Takes effect on the next write; call [`Hd44780::refresh_backlight`] to
    /// apply it right away.
    pub fn set_backlight(&mut self, backlight: Backlight) {
        self.backlight = backlight;
    }

    /// Write the backlight state without touching the controller
    pub fn refresh_backlight(&mut self) -> Result<(), DisplayError> {
        self.write_raw(self.backlight as u8)
    }

    /// Run the power-on initialization sequence
    pub fn initialize(&mut self) -> Result<(), DisplayError> {
        for &command in INIT_SEQUENCE.iter() {
            self.command(command)?;
        }
        self.delay.delay_ns(self.timing.settle_ns);
        Ok(())
    }

    /// Send an instruction byte
    pub fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write_byte(value, Mode::Command)
    }

    /// Send a data byte
    pub fn write_char(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write_byte(value, Mode::Character)
    }

    /// Send a byte as two nibbles, high first
    pub fn write_byte(&mut self, value: u8, mode: Mode) -> Result<(), DisplayError> {
        self.write_nibble(value >> 4, mode)?;
        self.write_nibble(value & 0x0F, mode)
    }

    /// Put a nibble on D4-D7 and strobe enable
    pub fn write_nibble(&mut self, nibble: u8, mode: Mode) -> Result<(), DisplayError> {
        let byte = mode as u8 | ((nibble & 0x0F) << 4) | self.backlight as u8;

        self.write_raw(byte)?;
        self.delay.delay_ns(self.timing.settle_ns);
        self.write_raw(byte | bits::ENABLE)?;
        self.delay.delay_ns(self.timing.enable_pulse_ns);
        self.write_raw(byte & !bits::ENABLE)?;
        self.delay.delay_ns(self.timing.settle_ns);

        Ok(())
    }

    /// Write a full line at a row address
    ///
    /// Text is padded with spaces or truncated to exactly [`LCD_COLS`]
    /// characters.
    pub fn write_string(&mut self, text: &str, line: Line) -> Result<(), DisplayError> {
        let buffer = DisplayLine::new(text);
        self.command(line.address())?;
        for &byte in buffer.as_bytes() {
            self.write_char(byte)?;
        }
        Ok(())
    }

    /// Load an 8-row bitmap into a CGRAM slot
    ///
    /// The controller advances the CGRAM address after each row.
    pub fn define_custom_glyph(&mut self, slot: u8, bitmap: &[u8; 8]) -> Result<(), DisplayError> {
        if slot >= GLYPH_SLOTS {
            return Err(DisplayError::InvalidGlyphSlot(slot));
        }

        self.command(cmd::SET_CGRAM_ADDR | (slot << 3))?;
        for &row in bitmap {
            self.write_char(row)?;
        }
        Ok(())
    }

    /// Clear the display
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR)
    }

    fn write_raw(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[byte])
            .map_err(|e| DisplayError::Bus(e.kind()))
    }
}

impl<I2C, D> CharacterDisplay for Hd44780<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn init(&mut self) -> Result<(), DisplayError> {
        self.initialize()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        Hd44780::clear(self)
    }

    fn write_line(&mut self, line: Line, text: &str) -> Result<(), DisplayError> {
        self.write_string(text, line)
    }

    fn define_glyph(&mut self, glyph: &CustomGlyph) -> Result<(), DisplayError> {
        self.define_custom_glyph(glyph.slot, &glyph.bitmap)
    }

    fn dimensions(&self) -> (u8, u8) {
        (LCD_COLS as u8, LCD_ROWS as u8)
    }
}
