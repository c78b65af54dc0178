//! Configuration type definitions
//!
//! Every field has a default matching the reference hardware (LCD1602
//! backpack at 0x27, keyboard-mode scanner 0525:a4ac), so a config file only
//! needs the values that differ.

use pricecheck_display::{Backlight, LcdConfig, Messages, Timing, DEFAULT_ADDRESS};
use pricecheck_hid::REPORT_LEN;

use crate::cycle::SCAN_BUFFER_LEN;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest valid 7-bit I2C address
const MAX_I2C_ADDRESS: u8 = 0x7F;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input is not valid TOML for this schema
    TomlParse,
    /// I2C address does not fit in 7 bits
    InvalidAddress(u8),
    /// Zero enable pulse or settle time
    InvalidTiming,
    /// Enable pulse or settle time below [`Timing::MINIMUM`]
    TimingBelowMinimum,
    /// Read length is zero, not whole reports, or larger than the buffer
    InvalidReadLength(usize),
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// 7-bit address of the I/O expander
    pub i2c_address: u8,
    /// Backlight on at startup
    pub backlight: bool,
    /// Enable strobe timing
    pub timing: Timing,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            i2c_address: DEFAULT_ADDRESS,
            backlight: true,
            timing: Timing::DEFAULT,
        }
    }
}

impl DisplayConfig {
    /// Driver configuration for these settings
    pub fn lcd_config(&self) -> LcdConfig {
        LcdConfig {
            address: self.i2c_address,
            backlight: Backlight::from(self.backlight),
            timing: self.timing,
        }
    }
}

/// Scanner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// USB vendor ID, for the code that claims the device
    pub vendor_id: u16,
    /// USB product ID, for the code that claims the device
    pub product_id: u16,
    /// Bytes requested per read (whole reports)
    pub read_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            vendor_id: 0x0525,
            product_id: 0xA4AC,
            read_len: 1000,
        }
    }
}

/// Complete price checker configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PriceCheckConfig {
    /// Display configuration
    pub display: DisplayConfig,
    /// Scanner configuration
    pub scanner: ScannerConfig,
    /// Screen texts
    pub messages: Messages,
}

impl PriceCheckConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.i2c_address > MAX_I2C_ADDRESS {
            return Err(ConfigError::InvalidAddress(self.display.i2c_address));
        }

        let timing = self.display.timing;
        if !timing.is_valid() {
            return Err(ConfigError::InvalidTiming);
        }
        if !timing.meets_minimum() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Strobe timing {} below controller minimum", timing);
            return Err(ConfigError::TimingBelowMinimum);
        }

        let read_len = self.scanner.read_len;
        if read_len == 0 || read_len % REPORT_LEN != 0 || read_len > SCAN_BUFFER_LEN {
            return Err(ConfigError::InvalidReadLength(read_len));
        }

        Ok(())
    }

    /// Parse and validate a TOML configuration
    ///
    /// ```toml
    /// [display]
    /// i2c_address = 0x3F
    ///
    /// [display.timing]
    /// settle_ns = 800000
    ///
    /// [messages]
    /// idle = "Scan uw product"
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|_| ConfigError::TomlParse)?;
        config.validate()?;
        Ok(config)
    }
}
