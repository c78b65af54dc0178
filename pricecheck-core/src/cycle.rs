//! Scan cycle
//!
//! One cycle is: read one scan from the scanner, decode it, look it up and
//! render the result. Each cycle returns a typed outcome; holding the result
//! on screen, going back to the idle prompt and retrying after errors are
//! decisions for the caller's loop.

use pricecheck_display::{CharacterDisplay, DisplayError, PriceFormatter};
use pricecheck_hid::{decode_scan, ScanError};

use crate::config::PriceCheckConfig;
use crate::traits::{ProductLookup, ScannerError, ScannerInput};

/// Size of the raw report buffer for one scan
pub const SCAN_BUFFER_LEN: usize = 1024;

/// Result of a completed cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanOutcome {
    /// Product found, title and price shown
    Displayed,
    /// Barcode not in the catalog, not-found message shown
    NotFound,
    /// Nothing usable scanned; display untouched
    NoResult,
}

/// Errors that end a cycle early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError {
    /// Reading from the scanner failed
    Scanner(ScannerError),
    /// Scan could not be decoded
    Decode(ScanError),
    /// Display update aborted; screen content is undefined
    Display(DisplayError),
}

impl From<ScannerError> for CycleError {
    fn from(e: ScannerError) -> Self {
        CycleError::Scanner(e)
    }
}

impl From<ScanError> for CycleError {
    fn from(e: ScanError) -> Self {
        CycleError::Decode(e)
    }
}

impl From<DisplayError> for CycleError {
    fn from(e: DisplayError) -> Self {
        CycleError::Display(e)
    }
}

/// Barcode price checker
///
/// Owns the scanner, the catalog and the display for its lifetime.
pub struct PriceChecker<S, L, D> {
    scanner: S,
    catalog: L,
    screens: PriceFormatter<D>,
    read_len: usize,
}

impl<S, L, D> PriceChecker<S, L, D>
where
    S: ScannerInput,
    L: ProductLookup,
    D: CharacterDisplay,
{
    /// Create a price checker
    ///
    /// `config` is expected to have passed [`PriceCheckConfig::validate`];
    /// the read length is clamped to [`SCAN_BUFFER_LEN`] regardless.
    pub fn new(scanner: S, catalog: L, display: D, config: &PriceCheckConfig) -> Self {
        Self {
            scanner,
            catalog,
            screens: PriceFormatter::new(display, config.messages.clone()),
            read_len: config.scanner.read_len.min(SCAN_BUFFER_LEN),
        }
    }

    /// Initialize the display and show the idle prompt
    pub fn start(&mut self) -> Result<(), CycleError> {
        self.screens.start()?;
        Ok(())
    }

    /// Run one scan cycle
    pub fn run_cycle(&mut self) -> Result<ScanOutcome, CycleError> {
        let mut buffer = [0u8; SCAN_BUFFER_LEN];
        let len = self.read_len;
        let read = self.scanner.read(&mut buffer[..len])?.min(len);

        let scan = decode_scan(&buffer[..read])?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Decoded {} from {} bytes", scan, read);

        if scan.is_empty() || !scan.is_terminated() {
            return Ok(ScanOutcome::NoResult);
        }

        match self.catalog.lookup(scan.as_str()) {
            Some(product) => {
                self.screens.show_product(product.title, product.price)?;
                Ok(ScanOutcome::Displayed)
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::info!("Barcode {=str} not in catalog", scan.as_str());

                self.screens.show_not_found()?;
                Ok(ScanOutcome::NotFound)
            }
        }
    }

    /// Clear the result and show the idle prompt
    pub fn reset_to_idle(&mut self) -> Result<(), CycleError> {
        self.screens.show_idle()?;
        Ok(())
    }

    /// Access the screen formatter
    pub fn screens_mut(&mut self) -> &mut PriceFormatter<D> {
        &mut self.screens
    }

    /// Give back the scanner, catalog and display
    pub fn release(self) -> (S, L, D) {
        (self.scanner, self.catalog, self.screens.into_inner())
    }
}
