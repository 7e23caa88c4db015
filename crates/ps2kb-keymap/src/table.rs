use core::fmt::Display;

use ps2kb_common::{dev_trace, util::BoundedIndex};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::KeyCode;

/// Number of addressable scancodes. Set 2 make codes never go past 0xEF;
/// 0xF0 and above are protocol prefixes (break, extended) and responses.
pub const SCANCODE_TABLE_LEN: usize = 0xF0;

/// A scancode that has already been checked to be a valid table slot.
pub type Scancode = BoundedIndex<SCANCODE_TABLE_LEN>;

/// A scancode byte that falls past the end of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScancodeOutOfRange(pub u8);

impl Display for ScancodeOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Scancode {:#04x} out of table range (max {:#04x})",
            self.0,
            SCANCODE_TABLE_LEN - 1
        )
    }
}

impl core::error::Error for ScancodeOutOfRange {}

/// Builds a [`ScancodeTable`] at compile time from `scancode => key` pairs.
/// Keys are either printable char literals or the names of [`KeyCode`]
/// constants:
///
/// ```
/// use ps2kb_keymap::{scancode_table, KeyCode, ScancodeTable};
///
/// static TABLE: ScancodeTable = scancode_table! {
///     0x1c => 'a',
///     0x5a => ENTER,
/// };
///
/// assert_eq!(TABLE.lookup(0x1c), KeyCode::ascii('a'));
/// assert_eq!(TABLE.lookup(0x5a), KeyCode::ENTER);
/// assert_eq!(TABLE.lookup(0x1b), KeyCode::NONE);
/// ```
#[macro_export]
macro_rules! scancode_table {
    ($($scancode:literal => $key:tt),* $(,)?) => {
        $crate::ScancodeTable::from_entries(&[
            $(($scancode, $crate::__keycode!($key))),*
        ])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __keycode {
    ($c:literal) => {
        $crate::KeyCode::ascii($c)
    };
    ($name:ident) => {
        $crate::KeyCode::$name
    };
}

/// Immutable map from scancode to [`KeyCode`]. Slots without an explicit
/// entry hold [`KeyCode::NONE`].
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct ScancodeTable {
    codes: [KeyCode; SCANCODE_TABLE_LEN],
}

impl ScancodeTable {
    /// A table with every slot unmapped.
    pub const fn empty() -> Self {
        Self {
            codes: [KeyCode::NONE; SCANCODE_TABLE_LEN],
        }
    }

    /// Panics if a scancode doesn't fit in the table, if it is assigned
    /// more than once, or if it is assigned [`KeyCode::NONE`]. Inside a
    /// static initializer all of these fail the build.
    pub const fn from_entries(entries: &[(u8, KeyCode)]) -> Self {
        let mut codes = [KeyCode::NONE; SCANCODE_TABLE_LEN];
        let mut i = 0;
        while i < entries.len() {
            let (scancode, key) = entries[i];
            let slot = scancode as usize;
            assert!(slot < SCANCODE_TABLE_LEN, "Scancode out of table range");
            assert!(key.is_mapped(), "Scancode entries can't be unmapped keys");
            assert!(!codes[slot].is_mapped(), "Scancode assigned more than once");
            codes[slot] = key;
            i += 1;
        }

        Self { codes }
    }

    /// Returns the key code of `scancode`, or [`KeyCode::NONE`] if it has
    /// no mapping. Scancodes past the end of the table are a caller bug and
    /// panic.
    #[inline(always)]
    pub fn lookup(&self, scancode: u8) -> KeyCode {
        self.codes[scancode as usize]
    }

    #[inline(always)]
    pub fn lookup_scancode(&self, scancode: Scancode) -> KeyCode {
        self.codes[scancode]
    }

    /// Like [`ScancodeTable::lookup`], but for bytes that may come from
    /// outside the table range, like raw bytes read from the wire.
    pub fn try_lookup(&self, scancode: u8) -> Result<KeyCode, ScancodeOutOfRange> {
        let Some(index) = Scancode::new(scancode as usize) else {
            dev_trace!("Scancode {:#04x} out of table range", scancode);
            return Err(ScancodeOutOfRange(scancode));
        };

        let key = self.lookup_scancode(index);
        if !key.is_mapped() {
            dev_trace!("Scancode {} has no mapping", index);
        }
        Ok(key)
    }

    /// Iterates over the mapped slots only, in scancode order.
    pub fn mapped(&self) -> impl Iterator<Item = (u8, KeyCode)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, key)| key.is_mapped())
            .map(|(scancode, key)| (scancode as u8, *key))
    }

    pub fn mapped_count(&self) -> usize {
        self.mapped().count()
    }

    pub const fn codes(&self) -> &[KeyCode; SCANCODE_TABLE_LEN] {
        &self.codes
    }

    /// Raw table image, two bytes per slot in the target's byte order.
    pub fn as_bytes(&self) -> &[u8] {
        IntoBytes::as_bytes(self)
    }
}

impl Default for ScancodeTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl core::fmt::Debug for ScancodeTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.mapped()).finish()
    }
}
