//! The 64-slot bitfield value type.
use std::fmt;

use num_traits::Bounded;

use crate::errors::{BitFieldError, Result};
use crate::setwise::{difference, intersection, union};

/// A set of up to 64 elements, where element `k` is a member iff bit `k` is 1.
///
/// Equality is bitwise equality of the underlying word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitField(u64);

impl BitField {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all 64 elements.
    pub const FULL: Self = Self(u64::MAX);

    /// The number of elements the universe holds.
    pub const CAPACITY: u8 = 64;

    /// Creates an empty set.
    #[inline(always)]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set whose membership is exactly the bit pattern `bits`.
    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Creates a set holding the given positions.
    ///
    /// This is the strict counterpart of folding [`Self::set_bit`]. By default a
    /// position at or beyond [`Self::CAPACITY`] names no slot and is silently
    /// ignored by the point operations. Here it is rejected with
    /// [`BitFieldError::OutOfRange`] instead.
    pub fn from_positions<I>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut f = Self::new();
        for k in positions {
            if k >= Self::CAPACITY {
                return Err(BitFieldError::out_of_range(k, Self::CAPACITY));
            }
            f = f.set_bit(k);
        }
        Ok(f)
    }

    /// Gets the underlying word.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Checks if no bit is set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks if any bit is set. Always the negation of [`Self::is_empty`].
    #[inline(always)]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Checks if all 64 bits are set.
    #[inline(always)]
    pub const fn is_all_set(self) -> bool {
        self.0 == u64::MAX
    }

    /// Returns a copy with bit `k` set. Does nothing if `k >= 64`.
    #[inline(always)]
    pub const fn set_bit(self, k: u8) -> Self {
        union(self, mask(k))
    }

    /// Returns a copy with bit `k` cleared. Does nothing if `k >= 64`.
    #[inline(always)]
    pub const fn del_bit(self, k: u8) -> Self {
        difference(self, mask(k))
    }

    /// Checks if bit `k` is set. Always `false` if `k >= 64`.
    #[inline(always)]
    pub const fn is_set(self, k: u8) -> bool {
        intersection(self, mask(k)).is_not_empty()
    }

    /// Gets the number of set bits, in `0..=64`.
    #[inline(always)]
    pub const fn cardinal(self) -> u8 {
        self.0.count_ones() as u8
    }
}

/// Produces the single-bit mask of position `k`, or the empty mask if `k` is
/// out of range. A native shift by 64 or more would overflow.
#[inline(always)]
const fn mask(k: u8) -> BitField {
    if k >= BitField::CAPACITY {
        BitField::EMPTY
    } else {
        BitField(1 << k)
    }
}

impl From<u64> for BitField {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<BitField> for u64 {
    fn from(f: BitField) -> Self {
        f.0
    }
}

impl fmt::Binary for BitField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl Bounded for BitField {
    fn min_value() -> Self {
        Self::EMPTY
    }

    fn max_value() -> Self {
        Self::FULL
    }
}
