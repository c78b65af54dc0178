//! Scan session decoding
//!
//! Turns the raw byte stream of one scan into the text the scanner typed.
//! Frames are decoded independently: no debouncing, no rollover tracking and
//! no repeat suppression.

use heapless::String;

use crate::keycode::ENTER;
use crate::report::{decode_frame, DecodeError, ReportFrame, REPORT_LEN};

/// Maximum characters kept from one scan
pub const MAX_SCAN_LEN: usize = 128;

/// Errors from decoding a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// More than [`MAX_SCAN_LEN`] characters before the Enter sentinel
    Overflow,
}

/// Text decoded from one scan, without the Enter sentinel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    text: String<MAX_SCAN_LEN>,
    terminated: bool,
    skipped: u16,
}

impl ScanResult {
    /// Decoded text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Whether the Enter sentinel was seen
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Whether nothing was decoded
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of frames dropped for unknown keycodes
    pub fn skipped_frames(&self) -> u16 {
        self.skipped
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScanResult {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ScanResult({=str}, terminated={=bool}, skipped={=u16})",
            self.text.as_str(),
            self.terminated,
            self.skipped
        );
    }
}

/// Decode a scan from raw report bytes
///
/// The input is split into consecutive [`REPORT_LEN`]-byte frames; a
/// trailing partial frame is ignored. Frames with unknown keycodes are
/// skipped. Decoding stops at the first Enter: the sentinel and everything
/// after it are not part of the result.
pub fn decode_scan(bytes: &[u8]) -> Result<ScanResult, ScanError> {
    let mut result = ScanResult::default();

    for chunk in bytes.chunks_exact(REPORT_LEN) {
        let mut frame: ReportFrame = [0; REPORT_LEN];
        frame.copy_from_slice(chunk);

        match decode_frame(&frame) {
            Ok(Some(ENTER)) => {
                result.terminated = true;
                break;
            }
            Ok(Some(ch)) => {
                result.text.push(ch).map_err(|_| ScanError::Overflow)?;
            }
            Ok(None) => {}
            Err(DecodeError::UnknownKeycode(_keycode)) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Skipping unknown keycode {=u8}", _keycode);
                result.skipped = result.skipped.saturating_add(1);
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Build a raw stream with one key-down report per keycode
    fn stream(keys: &[(u8, u8)]) -> heapless::Vec<u8, 2048> {
        let mut out = heapless::Vec::new();
        for &(modifier, keycode) in keys {
            out.extend_from_slice(&[modifier, 0, keycode, 0, 0, 0, 0, 0])
                .unwrap();
        }
        out
    }

    #[test]
    fn test_digits_then_enter() {
        let data = stream(&[(0, 30), (0, 31), (0, 32), (0, 33), (0, 34), (0, 40)]);
        let result = decode_scan(&data).unwrap();

        assert_eq!(result.as_str(), "12345");
        assert!(result.is_terminated());
    }

    #[test]
    fn test_key_up_reports_between_keys() {
        // Scanners send a release report after every key press
        let data = stream(&[(0, 30), (0, 0), (0, 31), (0, 0), (0, 40), (0, 0)]);
        assert_eq!(decode_scan(&data).unwrap().as_str(), "12");
    }

    #[test]
    fn test_mixed_case() {
        let data = stream(&[(2, 11), (0, 12), (2, 30), (0, 40)]);
        assert_eq!(decode_scan(&data).unwrap().as_str(), "Hi!");
    }

    #[test]
    fn test_everything_after_enter_is_dropped() {
        let data = stream(&[(0, 30), (0, 40), (0, 31), (0, 32)]);
        let result = decode_scan(&data).unwrap();

        assert_eq!(result.as_str(), "1");
        assert!(result.is_terminated());
    }

    #[test]
    fn test_unknown_keycode_does_not_stop_decoding() {
        let data = stream(&[(0, 30), (0, 57), (0, 31), (0, 40)]);
        let result = decode_scan(&data).unwrap();

        assert_eq!(result.as_str(), "12");
        assert_eq!(result.skipped_frames(), 1);
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        // Stateless decode: no repeat suppression
        let data = stream(&[(0, 30), (0, 30), (0, 40)]);
        assert_eq!(decode_scan(&data).unwrap().as_str(), "11");
    }

    #[test]
    fn test_unterminated_scan() {
        let data = stream(&[(0, 30), (0, 31)]);
        let result = decode_scan(&data).unwrap();

        assert_eq!(result.as_str(), "12");
        assert!(!result.is_terminated());
    }

    #[test]
    fn test_empty_input() {
        let result = decode_scan(&[]).unwrap();
        assert!(result.is_empty());
        assert!(!result.is_terminated());
    }

    #[test]
    fn test_enter_only() {
        let result = decode_scan(&stream(&[(0, 40)])).unwrap();
        assert!(result.is_empty());
        assert!(result.is_terminated());
    }

    #[test]
    fn test_trailing_partial_frame_ignored() {
        let mut data = stream(&[(0, 30), (0, 40)]);
        data.extend_from_slice(&[0, 0, 31]).unwrap();
        assert_eq!(decode_scan(&data).unwrap().as_str(), "1");
    }

    #[test]
    fn test_overflow() {
        let keys = [(0u8, 4u8); MAX_SCAN_LEN + 1];
        let data = stream(&keys);
        assert_eq!(decode_scan(&data), Err(ScanError::Overflow));
    }

    #[test]
    fn test_full_length_scan_fits() {
        let mut keys = [(0u8, 4u8); MAX_SCAN_LEN + 1];
        keys[MAX_SCAN_LEN] = (0, 40);
        let result = decode_scan(&stream(&keys)).unwrap();
        assert_eq!(result.as_str().len(), MAX_SCAN_LEN);
    }

    proptest! {
        #[test]
        fn prop_decode_scan_never_panics(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            let _ = decode_scan(&data);
        }

        #[test]
        fn prop_result_never_contains_enter(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            if let Ok(result) = decode_scan(&data) {
                prop_assert!(!result.as_str().contains(ENTER));
            }
        }
    }
}
