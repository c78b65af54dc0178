//! Scanner input trait

/// Errors that can occur reading from the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScannerError {
    /// No data within the read timeout
    Timeout,
    /// Device unplugged or endpoint gone
    Disconnected,
    /// Any other transfer error
    Transfer,
}

/// Raw report stream from a claimed scanner endpoint
///
/// Device lookup, kernel driver detach and endpoint claiming happen before
/// an implementation is handed to the scan cycle.
pub trait ScannerInput {
    /// Read report bytes into `buf`
    ///
    /// Blocks until the scanner delivers data or the transfer fails.
    /// Returns the number of bytes written to `buf`, which the scanner
    /// always delivers in whole 8-byte reports.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ScannerError>;
}

impl<T: ScannerInput + ?Sized> ScannerInput for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ScannerError> {
        (**self).read(buf)
    }
}
