//! Scan code set 2 make codes for a US ANSI layout.
//!
//! Only single byte make codes are covered. Keys behind the 0xE0 prefix
//! (right ctrl, right alt, arrows, ...) and F11/F12 are left unmapped.

use crate::{KeyCode, ScancodeTable};

#[rustfmt::skip]
pub static SET2_ANSI: ScancodeTable = crate::scancode_table! {
    // top row
    0x0e => '`',
    0x16 => '1',
    0x1e => '2',
    0x26 => '3',
    0x25 => '4',
    0x2e => '5',
    0x36 => '6',
    0x3d => '7',
    0x3e => '8',
    0x46 => '9',
    0x45 => '0',
    0x4e => '-',
    0x55 => '=',
    0x5d => '\\',
    0x66 => BACKSPACE,

    // second row
    0x0d => TAB,
    0x15 => 'q',
    0x1d => 'w',
    0x24 => 'e',
    0x2d => 'r',
    0x2c => 't',
    0x35 => 'y',
    0x3c => 'u',
    0x43 => 'i',
    0x44 => 'o',
    0x4d => 'p',
    0x54 => '[',
    0x5b => ']',
    0x5a => ENTER,

    // third row
    0x14 => LEFT_CTRL,
    0x1c => 'a',
    0x1b => 's',
    0x23 => 'd',
    0x2b => 'f',
    0x34 => 'g',
    0x33 => 'h',
    0x3b => 'j',
    0x42 => 'k',
    0x4b => 'l',
    0x4c => ';',
    0x52 => '\'',

    // fourth row
    0x12 => LEFT_SHIFT,
    0x1a => 'z',
    0x22 => 'x',
    0x21 => 'c',
    0x2a => 'v',
    0x32 => 'b',
    0x31 => 'n',
    0x3a => 'm',
    0x41 => ',',
    0x49 => '.',
    0x4a => '/',
    0x59 => RIGHT_SHIFT,

    // fifth row
    0x11 => LEFT_ALT,
    0x29 => ' ',
    0x58 => CAPS_LOCK,

    // keypad
    0x76 => ESC,
    0x77 => NUM_LOCK,
    0x7e => SCROLL_LOCK,
    0x6c => KEYPAD_7,
    0x75 => KEYPAD_8,
    0x7d => KEYPAD_9,
    0x6b => KEYPAD_4,
    0x73 => KEYPAD_5,
    0x74 => KEYPAD_6,
    0x69 => KEYPAD_1,
    0x72 => KEYPAD_2,
    0x7a => KEYPAD_3,
    0x70 => KEYPAD_0,
    0x71 => KEYPAD_PERIOD,
    0x7c => KEYPAD_ASTERIX,
    0x7b => KEYPAD_MINUS,
    0x79 => KEYPAD_PLUS,

    // function keys
    0x05 => F1,
    0x06 => F2,
    0x04 => F3,
    0x0c => F4,
    0x03 => F5,
    0x0b => F6,
    0x83 => F7,
    0x0a => F8,
    0x01 => F9,
    0x09 => F10,
};

/// Shorthand for `SET2_ANSI.lookup(scancode)`.
#[inline(always)]
pub fn lookup(scancode: u8) -> KeyCode {
    SET2_ANSI.lookup(scancode)
}

#[cfg(test)]
mod tests {
    use super::{SET2_ANSI, lookup};
    use crate::{KeyCode, KeyKind, Modifiers, SCANCODE_TABLE_LEN};

    const fn c(ch: char) -> KeyCode {
        KeyCode::ascii(ch)
    }

    #[rustfmt::skip]
    const EXPECTED: [(u8, KeyCode); 83] = [
        (0x0e, c('`')), (0x16, c('1')), (0x1e, c('2')), (0x26, c('3')),
        (0x25, c('4')), (0x2e, c('5')), (0x36, c('6')), (0x3d, c('7')),
        (0x3e, c('8')), (0x46, c('9')), (0x45, c('0')), (0x4e, c('-')),
        (0x55, c('=')), (0x5d, c('\\')), (0x66, KeyCode::BACKSPACE),

        (0x0d, KeyCode::TAB), (0x15, c('q')), (0x1d, c('w')), (0x24, c('e')),
        (0x2d, c('r')), (0x2c, c('t')), (0x35, c('y')), (0x3c, c('u')),
        (0x43, c('i')), (0x44, c('o')), (0x4d, c('p')), (0x54, c('[')),
        (0x5b, c(']')), (0x5a, KeyCode::ENTER),

        (0x14, KeyCode::LEFT_CTRL), (0x1c, c('a')), (0x1b, c('s')), (0x23, c('d')),
        (0x2b, c('f')), (0x34, c('g')), (0x33, c('h')), (0x3b, c('j')),
        (0x42, c('k')), (0x4b, c('l')), (0x4c, c(';')), (0x52, c('\'')),

        (0x12, KeyCode::LEFT_SHIFT), (0x1a, c('z')), (0x22, c('x')), (0x21, c('c')),
        (0x2a, c('v')), (0x32, c('b')), (0x31, c('n')), (0x3a, c('m')),
        (0x41, c(',')), (0x49, c('.')), (0x4a, c('/')), (0x59, KeyCode::RIGHT_SHIFT),

        (0x11, KeyCode::LEFT_ALT), (0x29, c(' ')), (0x58, KeyCode::CAPS_LOCK),

        (0x76, KeyCode::ESC), (0x77, KeyCode::NUM_LOCK), (0x7e, KeyCode::SCROLL_LOCK),
        (0x6c, KeyCode::KEYPAD_7), (0x75, KeyCode::KEYPAD_8), (0x7d, KeyCode::KEYPAD_9),
        (0x6b, KeyCode::KEYPAD_4), (0x73, KeyCode::KEYPAD_5), (0x74, KeyCode::KEYPAD_6),
        (0x69, KeyCode::KEYPAD_1), (0x72, KeyCode::KEYPAD_2), (0x7a, KeyCode::KEYPAD_3),
        (0x70, KeyCode::KEYPAD_0), (0x71, KeyCode::KEYPAD_PERIOD),
        (0x7c, KeyCode::KEYPAD_ASTERIX), (0x7b, KeyCode::KEYPAD_MINUS),
        (0x79, KeyCode::KEYPAD_PLUS),

        (0x05, KeyCode::F1), (0x06, KeyCode::F2), (0x04, KeyCode::F3), (0x0c, KeyCode::F4),
        (0x03, KeyCode::F5), (0x0b, KeyCode::F6), (0x83, KeyCode::F7), (0x0a, KeyCode::F8),
        (0x01, KeyCode::F9), (0x09, KeyCode::F10),
    ];

    fn expected_for(scancode: u8) -> KeyCode {
        EXPECTED
            .iter()
            .find(|(sc, _)| *sc == scancode)
            .map(|(_, key)| *key)
            .unwrap_or(KeyCode::NONE)
    }

    #[test]
    fn test_documented_entries() {
        for (scancode, key) in EXPECTED {
            assert_eq!(lookup(scancode), key, "scancode {:#04x}", scancode);
        }
    }

    #[test]
    fn test_spot_checks() {
        assert_eq!(lookup(0x1c), KeyCode::ascii('a'));
        assert_eq!(lookup(0x5a), KeyCode::ENTER);
        assert_eq!(lookup(0x76), KeyCode::ESC);
    }

    #[test]
    fn test_everything_else_unmapped() {
        for scancode in 0..SCANCODE_TABLE_LEN as u8 {
            assert_eq!(lookup(scancode), expected_for(scancode), "scancode {:#04x}", scancode);
        }
    }

    #[test]
    fn test_mapped_count() {
        assert_eq!(SET2_ANSI.mapped_count(), EXPECTED.len());
        assert_eq!(SET2_ANSI.codes().len(), 240);
    }

    #[test]
    fn test_expected_has_unique_scancodes() {
        for (i, (a, _)) in EXPECTED.iter().enumerate() {
            for (b, _) in &EXPECTED[i + 1..] {
                assert_ne!(a, b, "scancode {:#04x} listed twice", a);
            }
        }
    }

    #[test]
    fn test_repeated_lookups() {
        for scancode in 0..SCANCODE_TABLE_LEN as u8 {
            let first = lookup(scancode);
            assert_eq!(lookup(scancode), first);
            assert_eq!(SET2_ANSI.try_lookup(scancode), Ok(first));
        }
    }

    #[test]
    fn test_intentional_gaps() {
        // F11, F12 and the extended keys are not single byte make codes.
        assert_eq!(lookup(0x78), KeyCode::NONE);
        assert_eq!(lookup(0x07), KeyCode::NONE);
        assert_eq!(lookup(0x00), KeyCode::NONE);
        assert_eq!(lookup(0xef), KeyCode::NONE);
    }

    #[test]
    fn test_modifiers_classified() {
        let modifiers: Modifiers = SET2_ANSI
            .mapped()
            .filter_map(|(_, key)| match key.kind() {
                KeyKind::Modifier(m) => Some(m),
                _ => None,
            })
            .fold(Modifiers::empty(), |acc, m| acc | m);
        assert_eq!(
            modifiers,
            Modifiers::LEFT_CTRL | Modifiers::LEFT_SHIFT | Modifiers::LEFT_ALT | Modifiers::RIGHT_SHIFT
        );
    }

    #[test]
    fn test_no_unknown_keys() {
        for (scancode, key) in SET2_ANSI.mapped() {
            assert!(
                !matches!(key.kind(), KeyKind::Unknown(_) | KeyKind::Unmapped),
                "scancode {:#04x} holds {:?}",
                scancode,
                key
            );
        }
    }
}
