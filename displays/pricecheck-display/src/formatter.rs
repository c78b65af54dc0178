//! Price checker screens
//!
//! Maps lookup results onto the two display lines:
//!
//! ```text
//! ┌────────────────┐   ┌────────────────┐   ┌────────────────┐
//! │Wooden puzzle bo│   │Product not     │   │Scan a product  │
//! │€12,50          │   │found           │   │                │
//! └────────────────┘   └────────────────┘   └────────────────┘
//!      product              not found             idle
//! ```
//!
//! Texts are kept whole here; the driver cuts them to the display width.

use core::iter;

use heapless::String;

use crate::backend::{CharacterDisplay, DisplayError};
use crate::glyph::{CustomGlyph, EURO};
use crate::screen::{Line, LINE_BYTES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Glyph shown in front of prices
pub const CURRENCY_GLYPH: CustomGlyph = EURO;

/// Character code that renders [`CURRENCY_GLYPH`]
pub const CURRENCY_PLACEHOLDER: char = '\u{0}';

/// Fixed screen texts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Messages {
    /// Prompt shown while waiting for a scan
    pub idle: String<LINE_BYTES>,
    /// First line of the not-found message
    pub not_found_1: String<LINE_BYTES>,
    /// Second line of the not-found message
    pub not_found_2: String<LINE_BYTES>,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            idle: fit("Scan a product"),
            not_found_1: fit("Product not"),
            not_found_2: fit("found"),
        }
    }
}

/// Copy as many whole characters as fit
pub fn fit<const N: usize>(text: &str) -> String<N> {
    fit_chars(text.chars())
}

fn fit_chars<const N: usize>(chars: impl Iterator<Item = char>) -> String<N> {
    let mut out = String::new();
    for ch in chars {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Renders price checker screens onto a character display
pub struct PriceFormatter<D> {
    display: D,
    messages: Messages,
}

impl<D: CharacterDisplay> PriceFormatter<D> {
    /// Create a formatter
    pub fn new(display: D, messages: Messages) -> Self {
        Self { display, messages }
    }

    /// Initialize the display, load the currency glyph and show the prompt
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.display.init()?;
        self.display.define_glyph(&CURRENCY_GLYPH)?;
        self.show_idle()
    }

    /// Show a product title and price
    ///
    /// `price` is shown as given, after the currency glyph.
    pub fn show_product(&mut self, title: &str, price: &str) -> Result<(), DisplayError> {
        let line2: String<LINE_BYTES> =
            fit_chars(iter::once(CURRENCY_PLACEHOLDER).chain(price.chars()));

        self.display.write_line(Line::One, title)?;
        self.display.write_line(Line::Two, &line2)
    }

    /// Show the not-found message
    pub fn show_not_found(&mut self) -> Result<(), DisplayError> {
        self.display.write_line(Line::One, &self.messages.not_found_1)?;
        self.display.write_line(Line::Two, &self.messages.not_found_2)
    }

    /// Clear and show the scan prompt
    pub fn show_idle(&mut self) -> Result<(), DisplayError> {
        self.display.clear()?;
        self.display.write_line(Line::One, &self.messages.idle)
    }

    /// Screen texts in use
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Access the underlying display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Consume the formatter and return the display
    pub fn into_inner(self) -> D {
        self.display
    }
}
