//! Error definitions.
//!
//! Only the checked constructor [`crate::BitField::from_positions`] reports
//! errors. The point operations treat out-of-range positions as no-ops.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = BitFieldError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitFieldError {
    /// Contains [`OutOfRangeError`].
    OutOfRange(OutOfRangeError),
}

impl fmt::Display for BitFieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OutOfRange(e) => e.fmt(f),
        }
    }
}

impl Error for BitFieldError {}

impl BitFieldError {
    pub(crate) const fn out_of_range(position: u8, capacity: u8) -> Self {
        Self::OutOfRange(OutOfRangeError { position, capacity })
    }
}

/// Error used when a position names no slot of the bitfield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeError {
    position: u8,
    capacity: u8,
}

impl OutOfRangeError {
    /// Gets the rejected position.
    pub const fn position(&self) -> u8 {
        self.position
    }
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "OutOfRangeError: position {} must be less than {}",
            self.position, self.capacity
        )
    }
}
