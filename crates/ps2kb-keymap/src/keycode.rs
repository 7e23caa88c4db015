use core::fmt::{Debug, Display};

use bitflags::bitflags;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

const MODIFIER_PREFIX: u16 = 0xE000;
const NAMED_PREFIX: u16 = 0xF000;

bitflags! {
    /// HID keyboard modifier bits, as laid out in the first byte of a boot
    /// protocol report.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const LEFT_CTRL = 0x01;
        const LEFT_SHIFT = 0x02;
        const LEFT_ALT = 0x04;
        const LEFT_GUI = 0x08;
        const RIGHT_CTRL = 0x10;
        const RIGHT_SHIFT = 0x20;
        const RIGHT_ALT = 0x40;
        const RIGHT_GUI = 0x80;
    }
}

/// What a [`KeyCode`] stands for, decoded from its numeric range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Unmapped,
    /// A printable ASCII character.
    Ascii(char),
    Modifier(Modifiers),
    /// A non-printable key, carrying its HID keyboard usage id.
    Named(u8),
    Unknown(u16),
}

/// Logical key identifier. Printable characters are stored as their ASCII
/// value, modifiers as `0xE000 | bits` and the rest of the keys as
/// `0xF000 | hid usage`. Zero means no key at all.
#[repr(transparent)]
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
pub struct KeyCode(u16);

impl KeyCode {
    pub const NONE: KeyCode = KeyCode(0);

    pub const LEFT_CTRL: KeyCode = KeyCode::modifier(Modifiers::LEFT_CTRL);
    pub const LEFT_SHIFT: KeyCode = KeyCode::modifier(Modifiers::LEFT_SHIFT);
    pub const LEFT_ALT: KeyCode = KeyCode::modifier(Modifiers::LEFT_ALT);
    pub const LEFT_GUI: KeyCode = KeyCode::modifier(Modifiers::LEFT_GUI);
    pub const RIGHT_CTRL: KeyCode = KeyCode::modifier(Modifiers::RIGHT_CTRL);
    pub const RIGHT_SHIFT: KeyCode = KeyCode::modifier(Modifiers::RIGHT_SHIFT);
    pub const RIGHT_ALT: KeyCode = KeyCode::modifier(Modifiers::RIGHT_ALT);
    pub const RIGHT_GUI: KeyCode = KeyCode::modifier(Modifiers::RIGHT_GUI);

    pub const ENTER: KeyCode = KeyCode::named(40);
    pub const ESC: KeyCode = KeyCode::named(41);
    pub const BACKSPACE: KeyCode = KeyCode::named(42);
    pub const TAB: KeyCode = KeyCode::named(43);
    pub const CAPS_LOCK: KeyCode = KeyCode::named(57);

    pub const F1: KeyCode = KeyCode::named(58);
    pub const F2: KeyCode = KeyCode::named(59);
    pub const F3: KeyCode = KeyCode::named(60);
    pub const F4: KeyCode = KeyCode::named(61);
    pub const F5: KeyCode = KeyCode::named(62);
    pub const F6: KeyCode = KeyCode::named(63);
    pub const F7: KeyCode = KeyCode::named(64);
    pub const F8: KeyCode = KeyCode::named(65);
    pub const F9: KeyCode = KeyCode::named(66);
    pub const F10: KeyCode = KeyCode::named(67);
    pub const F11: KeyCode = KeyCode::named(68);
    pub const F12: KeyCode = KeyCode::named(69);

    pub const SCROLL_LOCK: KeyCode = KeyCode::named(71);
    pub const NUM_LOCK: KeyCode = KeyCode::named(83);

    pub const KEYPAD_SLASH: KeyCode = KeyCode::named(84);
    pub const KEYPAD_ASTERIX: KeyCode = KeyCode::named(85);
    pub const KEYPAD_MINUS: KeyCode = KeyCode::named(86);
    pub const KEYPAD_PLUS: KeyCode = KeyCode::named(87);
    pub const KEYPAD_ENTER: KeyCode = KeyCode::named(88);
    pub const KEYPAD_1: KeyCode = KeyCode::named(89);
    pub const KEYPAD_2: KeyCode = KeyCode::named(90);
    pub const KEYPAD_3: KeyCode = KeyCode::named(91);
    pub const KEYPAD_4: KeyCode = KeyCode::named(92);
    pub const KEYPAD_5: KeyCode = KeyCode::named(93);
    pub const KEYPAD_6: KeyCode = KeyCode::named(94);
    pub const KEYPAD_7: KeyCode = KeyCode::named(95);
    pub const KEYPAD_8: KeyCode = KeyCode::named(96);
    pub const KEYPAD_9: KeyCode = KeyCode::named(97);
    pub const KEYPAD_0: KeyCode = KeyCode::named(98);
    pub const KEYPAD_PERIOD: KeyCode = KeyCode::named(99);

    /// Key code of a printable ASCII character. Panics for anything else,
    /// which turns into a build error when used in a const context.
    pub const fn ascii(c: char) -> KeyCode {
        assert!(
            c == ' ' || c.is_ascii_graphic(),
            "Only printable ASCII characters are valid key codes"
        );
        KeyCode(c as u16)
    }

    pub const fn modifier(modifiers: Modifiers) -> KeyCode {
        KeyCode(MODIFIER_PREFIX | modifiers.bits() as u16)
    }

    pub const fn named(usage: u8) -> KeyCode {
        KeyCode(NAMED_PREFIX | usage as u16)
    }

    pub const fn from_raw(raw: u16) -> KeyCode {
        KeyCode(raw)
    }

    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline(always)]
    pub const fn is_mapped(self) -> bool {
        self.0 != 0
    }

    pub const fn kind(self) -> KeyKind {
        let low = (self.0 & 0xFF) as u8;
        match self.0 & 0xFF00 {
            0 if self.0 == 0 => KeyKind::Unmapped,
            0 if low == b' ' || low.is_ascii_graphic() => KeyKind::Ascii(low as char),
            MODIFIER_PREFIX if low != 0 => KeyKind::Modifier(Modifiers::from_bits_retain(low)),
            NAMED_PREFIX if low != 0 => KeyKind::Named(low),
            _ => KeyKind::Unknown(self.0),
        }
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        KeyCode::NONE
    }
}

impl From<KeyCode> for u16 {
    fn from(value: KeyCode) -> Self {
        value.0
    }
}

impl From<Modifiers> for KeyCode {
    fn from(value: Modifiers) -> Self {
        KeyCode::modifier(value)
    }
}

impl Debug for KeyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KeyCode({:#06x}, {:?})", self.0, self.kind())
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind() {
            KeyKind::Unmapped => write!(f, "none"),
            KeyKind::Ascii(c) => write!(f, "{:?}", c),
            KeyKind::Modifier(modifiers) => bitflags::parser::to_writer(&modifiers, f),
            KeyKind::Named(usage) => write!(f, "usage {:#04x}", usage),
            KeyKind::Unknown(raw) => write!(f, "unknown {:#06x}", raw),
        }
    }
}
