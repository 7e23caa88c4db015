use core::fmt::{Debug, Display};
use core::ops::Index;

/// An index that is known to be lower than `LENGTH`, so it can be used for
/// accessing an array of that length without any runtime bounds check.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedIndex<const LENGTH: usize>(usize);

impl<const LENGTH: usize> BoundedIndex<LENGTH> {
    const fn assert_range_ok(value: usize) {
        assert!(value < LENGTH, "Value out of bounds");
    }

    /// Builds an index from a constant, failing the build if it is out of
    /// bounds.
    pub const fn from_const<const N: usize>() -> Self {
        const {
            Self::assert_range_ok(N);
        }

        Self(N)
    }

    pub const fn new(value: usize) -> Option<Self> {
        if value < LENGTH { Some(Self(value)) } else { None }
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl<const LENGTH: usize> TryFrom<u8> for BoundedIndex<LENGTH> {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize).ok_or(value)
    }
}

impl<const LENGTH: usize> Debug for BoundedIndex<LENGTH> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#04x}/{:#04x}", self.0, LENGTH)
    }
}

impl<const LENGTH: usize> Display for BoundedIndex<LENGTH> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl<A, const LENGTH: usize> Index<BoundedIndex<LENGTH>> for [A; LENGTH] {
    type Output = A;

    #[inline(always)]
    fn index(&self, index: BoundedIndex<LENGTH>) -> &Self::Output {
        unsafe {
            // SAFETY: index < LENGTH is checked on construction.
            self.get_unchecked(index.0)
        }
    }
}
