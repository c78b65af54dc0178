//! Single report decoding
//!
//! A report decodes to at most one character: the first keycode left after
//! discarding "no key" bytes and shift-marker bytes.
//!
//! The discard is value-based, not positional. Every byte equal to
//! [`NO_KEY`] or [`SHIFT_MARKER`] is dropped wherever it sits in the frame,
//! including the modifier byte itself. Two consequences follow and are kept
//! on purpose until checked against real scanner captures:
//!
//! - a modifier other than left shift (e.g. right shift, 0x20) is not
//!   dropped and gets decoded as if it were a keycode;
//! - a keycode slot holding 0x02 is treated as a shift marker and ignored.

use crate::keycode;

/// Length of a boot-keyboard report
pub const REPORT_LEN: usize = 8;

/// Keycode value meaning "no key pressed"
pub const NO_KEY: u8 = 0x00;

/// Modifier value for left shift
pub const SHIFT_MARKER: u8 = 0x02;

/// One HID boot-keyboard report
pub type ReportFrame = [u8; REPORT_LEN];

/// Errors from decoding a single report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Keycode has no entry in the scan code table
    UnknownKeycode(u8),
}

/// Check whether the report has left shift held
#[inline]
pub fn is_shifted(frame: &ReportFrame) -> bool {
    frame[0] == SHIFT_MARKER
}

/// Decode one report into a character
///
/// Returns `Ok(None)` for idle and modifier-only reports.
pub fn decode_frame(frame: &ReportFrame) -> Result<Option<char>, DecodeError> {
    let shifted = is_shifted(frame);

    let Some(&keycode) = frame
        .iter()
        .find(|&&byte| byte != NO_KEY && byte != SHIFT_MARKER)
    else {
        return Ok(None);
    };

    keycode::lookup(keycode)
        .map(|entry| Some(entry.char_for(shifted)))
        .ok_or(DecodeError::UnknownKeycode(keycode))
}
