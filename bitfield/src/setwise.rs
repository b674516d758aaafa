//! Set algebra over [`BitField`] values.
//!
//! Every function is total and returns a new value.
use crate::bitfield::BitField;

/// Returns the complement of `f`, flipping all 64 bits.
#[inline(always)]
pub const fn invert(f: BitField) -> BitField {
    BitField::from_bits(!f.bits())
}

/// Returns the elements in `x` or `y`.
#[inline(always)]
pub const fn union(x: BitField, y: BitField) -> BitField {
    BitField::from_bits(x.bits() | y.bits())
}

/// Returns the elements in both `x` and `y`.
#[inline(always)]
pub const fn intersection(x: BitField, y: BitField) -> BitField {
    BitField::from_bits(x.bits() & y.bits())
}

/// Returns the elements in `x` but not in `y`.
///
/// Not commutative: `difference(x, y)` and `difference(y, x)` differ unless
/// `x == y`.
#[inline(always)]
pub const fn difference(x: BitField, y: BitField) -> BitField {
    BitField::from_bits(x.bits() ^ intersection(x, y).bits())
}
