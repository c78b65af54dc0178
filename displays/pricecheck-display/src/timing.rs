//! Enable strobe timing
//!
//! The controller latches a nibble on the falling edge of the enable line.
//! Too short a pulse, or too little settle time between transitions, and the
//! strobe is missed and the controller's nibble phase drifts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strobe timing in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timing {
    /// How long enable is held high
    pub enable_pulse_ns: u32,
    /// Wait before raising and after lowering enable
    pub settle_ns: u32,
}

impl Timing {
    /// Datasheet floor for an HD44780 behind a PCF8574
    pub const MINIMUM: Self = Self {
        enable_pulse_ns: 450,
        settle_ns: 600_000,
    };

    /// Values proven on the LCD1602 backpack modules
    pub const DEFAULT: Self = Self {
        enable_pulse_ns: 500_000,
        settle_ns: 600_000,
    };

    /// Check that both intervals are non-zero
    pub const fn is_valid(&self) -> bool {
        self.enable_pulse_ns > 0 && self.settle_ns > 0
    }

    /// Check whether both intervals meet [`Timing::MINIMUM`]
    pub const fn meets_minimum(&self) -> bool {
        self.enable_pulse_ns >= Self::MINIMUM.enable_pulse_ns
            && self.settle_ns >= Self::MINIMUM.settle_ns
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_meets_minimum() {
        assert!(Timing::default().meets_minimum());
        assert!(Timing::MINIMUM.meets_minimum());
    }

    #[test]
    fn test_short_settle_is_flagged() {
        let timing = Timing {
            enable_pulse_ns: 500,
            settle_ns: 100_000,
        };
        assert!(timing.is_valid());
        assert!(!timing.meets_minimum());
    }

    #[test]
    fn test_zero_is_invalid() {
        let timing = Timing {
            enable_pulse_ns: 0,
            settle_ns: 600_000,
        };
        assert!(!timing.is_valid());
    }
}
