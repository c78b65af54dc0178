//! Keycode to character table
//!
//! Maps HID keyboard usage IDs to the (plain, shifted) character pair a US
//! layout produces. The table is a compile-time constant; [`lookup`] goes
//! through a 256-slot index built in a `const` context.

/// Character the scanner sends to terminate a scan (Enter key)
pub const ENTER: char = '\n';

/// One keycode mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeycodeEntry {
    /// HID usage ID
    pub keycode: u8,
    /// Character without shift
    pub plain: char,
    /// Character with shift held
    pub shifted: char,
}

impl KeycodeEntry {
    const fn new(keycode: u8, plain: char, shifted: char) -> Self {
        Self {
            keycode,
            plain,
            shifted,
        }
    }

    /// Character for the given shift state
    #[inline]
    pub const fn char_for(&self, shifted: bool) -> char {
        if shifted {
            self.shifted
        } else {
            self.plain
        }
    }
}

/// Number of entries in [`SCAN_CODES`]
pub const SCAN_CODE_COUNT: usize = 55;

/// All supported keycodes
pub static SCAN_CODES: [KeycodeEntry; SCAN_CODE_COUNT] = TABLE;

// 49 and 100 both map to `\` / `|` (US and non-US backslash keys)
const TABLE: [KeycodeEntry; SCAN_CODE_COUNT] = [
    KeycodeEntry::new(4, 'a', 'A'),
    KeycodeEntry::new(5, 'b', 'B'),
    KeycodeEntry::new(6, 'c', 'C'),
    KeycodeEntry::new(7, 'd', 'D'),
    KeycodeEntry::new(8, 'e', 'E'),
    KeycodeEntry::new(9, 'f', 'F'),
    KeycodeEntry::new(10, 'g', 'G'),
    KeycodeEntry::new(11, 'h', 'H'),
    KeycodeEntry::new(12, 'i', 'I'),
    KeycodeEntry::new(13, 'j', 'J'),
    KeycodeEntry::new(14, 'k', 'K'),
    KeycodeEntry::new(15, 'l', 'L'),
    KeycodeEntry::new(16, 'm', 'M'),
    KeycodeEntry::new(17, 'n', 'N'),
    KeycodeEntry::new(18, 'o', 'O'),
    KeycodeEntry::new(19, 'p', 'P'),
    KeycodeEntry::new(20, 'q', 'Q'),
    KeycodeEntry::new(21, 'r', 'R'),
    KeycodeEntry::new(22, 's', 'S'),
    KeycodeEntry::new(23, 't', 'T'),
    KeycodeEntry::new(24, 'u', 'U'),
    KeycodeEntry::new(25, 'v', 'V'),
    KeycodeEntry::new(26, 'w', 'W'),
    KeycodeEntry::new(27, 'x', 'X'),
    KeycodeEntry::new(28, 'y', 'Y'),
    KeycodeEntry::new(29, 'z', 'Z'),
    KeycodeEntry::new(30, '1', '!'),
    KeycodeEntry::new(31, '2', '@'),
    KeycodeEntry::new(32, '3', '#'),
    KeycodeEntry::new(33, '4', '$'),
    KeycodeEntry::new(34, '5', '%'),
    KeycodeEntry::new(35, '6', '^'),
    KeycodeEntry::new(36, '7', '&'),
    KeycodeEntry::new(37, '8', '*'),
    KeycodeEntry::new(38, '9', '('),
    KeycodeEntry::new(39, '0', ')'),
    KeycodeEntry::new(40, ENTER, ENTER),
    KeycodeEntry::new(41, '\x1b', '\x1b'), // Escape
    KeycodeEntry::new(42, '\x08', '\x08'), // Backspace
    KeycodeEntry::new(43, '\t', '\t'),
    KeycodeEntry::new(44, ' ', ' '),
    KeycodeEntry::new(45, '_', '_'),
    KeycodeEntry::new(46, '=', '+'),
    KeycodeEntry::new(47, '[', '{'),
    KeycodeEntry::new(48, ']', '}'),
    KeycodeEntry::new(49, '\\', '|'),
    KeycodeEntry::new(50, '#', '~'),
    KeycodeEntry::new(51, ';', ':'),
    KeycodeEntry::new(52, '\'', '"'),
    KeycodeEntry::new(53, '`', '~'),
    KeycodeEntry::new(54, ',', '<'),
    KeycodeEntry::new(55, '.', '>'),
    KeycodeEntry::new(56, '/', '?'),
    KeycodeEntry::new(100, '\\', '|'),
    KeycodeEntry::new(103, '=', '='),
];

/// Index from keycode to position in [`SCAN_CODES`] (`u8::MAX` = unmapped)
static INDEX: [u8; 256] = build_index();

const fn build_index() -> [u8; 256] {
    let mut index = [u8::MAX; 256];
    let mut i = 0;
    while i < TABLE.len() {
        let keycode = TABLE[i].keycode as usize;
        assert!(index[keycode] == u8::MAX, "duplicate keycode in scan code table");
        index[keycode] = i as u8;
        i += 1;
    }
    index
}

/// Look up a keycode
///
/// Returns `None` for keycodes the table does not cover.
#[inline]
pub fn lookup(keycode: u8) -> Option<&'static KeycodeEntry> {
    match INDEX[keycode as usize] {
        u8::MAX => None,
        i => SCAN_CODES.get(i as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letters() {
        assert_eq!(lookup(4).unwrap().char_for(false), 'a');
        assert_eq!(lookup(4).unwrap().char_for(true), 'A');
        assert_eq!(lookup(29).unwrap().char_for(false), 'z');
        assert_eq!(lookup(29).unwrap().char_for(true), 'Z');
    }

    #[test]
    fn test_digits_and_symbols() {
        let expected = [
            ('1', '!'),
            ('2', '@'),
            ('3', '#'),
            ('4', '$'),
            ('5', '%'),
            ('6', '^'),
            ('7', '&'),
            ('8', '*'),
            ('9', '('),
            ('0', ')'),
        ];
        for (offset, (plain, shifted)) in expected.iter().enumerate() {
            let entry = lookup(30 + offset as u8).unwrap();
            assert_eq!(entry.plain, *plain);
            assert_eq!(entry.shifted, *shifted);
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(lookup(40).unwrap().plain, ENTER);
        assert_eq!(lookup(40).unwrap().shifted, ENTER);
        assert_eq!(lookup(41).unwrap().plain, '\x1b');
        assert_eq!(lookup(42).unwrap().plain, '\x08');
        assert_eq!(lookup(43).unwrap().plain, '\t');
        assert_eq!(lookup(44).unwrap().plain, ' ');
        assert_eq!(lookup(45).unwrap().plain, '_');
    }

    #[test]
    fn test_backslash_alias() {
        let us = lookup(49).unwrap();
        let non_us = lookup(100).unwrap();
        assert_eq!((us.plain, us.shifted), (non_us.plain, non_us.shifted));
    }

    #[test]
    fn test_unknown_keycodes() {
        assert!(lookup(0).is_none());
        assert!(lookup(1).is_none());
        assert!(lookup(57).is_none()); // Caps Lock
        assert!(lookup(0xFF).is_none());
    }

    proptest! {
        #[test]
        fn prop_table_keycodes_always_resolve(i in 0..SCAN_CODES.len(), shifted in any::<bool>()) {
            let entry = &SCAN_CODES[i];
            let found = lookup(entry.keycode).unwrap();
            prop_assert_eq!(found, entry);
            prop_assert_eq!(found.char_for(shifted), lookup(entry.keycode).unwrap().char_for(shifted));
        }

        #[test]
        fn prop_lookup_matches_table(keycode in any::<u8>()) {
            let in_table = SCAN_CODES.iter().any(|e| e.keycode == keycode);
            prop_assert_eq!(lookup(keycode).is_some(), in_table);
        }
    }
}
