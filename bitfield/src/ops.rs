//! Operator forms of the set algebra in [`crate::setwise`].
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign};

use crate::bitfield::BitField;
use crate::setwise::{difference, intersection, invert, union};

impl Not for BitField {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        invert(self)
    }
}

impl BitOr for BitField {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        union(self, rhs)
    }
}

impl BitAnd for BitField {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        intersection(self, rhs)
    }
}

/// Set difference, `x - y` being the elements in `x` but not in `y`.
impl Sub for BitField {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        difference(self, rhs)
    }
}

impl BitOrAssign for BitField {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = union(*self, rhs);
    }
}

impl BitAndAssign for BitField {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = intersection(*self, rhs);
    }
}

impl SubAssign for BitField {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = difference(*self, rhs);
    }
}
