//! A fixed-width set of 64 elements packed into a single `u64`.
//!
//! Bit `k` of the word (counted from the least significant bit) records whether
//! element `k` is a member. [`BitField`] is a plain `Copy` value: every operation
//! that "modifies" the set returns a new value and leaves its input untouched.
//!
//! Positions are `u8`. A position at or beyond 64 names no slot, so
//! [`BitField::set_bit`] and [`BitField::del_bit`] ignore it and
//! [`BitField::is_set`] reports `false`.
//!
//! # Examples
//!
//! ```
//! use bitfield::{difference, union, BitField};
//!
//! let f = BitField::new().set_bit(0).set_bit(1).set_bit(2);
//! assert_eq!(f.bits(), 0b0000_0111);
//! assert_eq!(f.cardinal(), 3);
//! assert_eq!(f.set_bit(64), f);
//!
//! let x = BitField::from_bits(0b0011_0011);
//! let y = BitField::from_bits(0b0101_0101);
//! assert_eq!(union(x, y).bits(), 0b0111_0111);
//! assert_eq!(difference(x, y).bits(), 0b0010_0010);
//! assert_eq!((x - y).bits(), 0b0010_0010);
//! ```
#![deny(missing_docs)]

mod bitfield;
pub mod errors;
mod ops;
pub mod setwise;

pub use crate::bitfield::BitField;
pub use setwise::{difference, intersection, invert, union};
