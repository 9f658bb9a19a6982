//! Fundamental data types used throughout tinybf

use std::{
    fmt::Display,
    num::Wrapping,
    ops::{Add, AddAssign, Sub, SubAssign},
};
use thiserror::Error;

/// Error type for tapes and the pointer into them
#[derive(Debug, Clone, Copy, Error, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum TapeError {
    /// A tape needs at least one cell for the pointer to point at.
    #[error("Tape must have at least one cell")]
    ZeroLength,
    /// The pointer handed to the interpreter is not on the tape.
    #[error("Tape pointer {ptr} is outside a tape of {len} cells")]
    PointerOutOfRange { ptr: usize, len: usize },
}

/// Newtype for the data pointer.
///
/// The pointer never leaves the tape: moves past either end are clamped
/// rather than reported.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct TapeAddr(pub usize);

impl TapeAddr {
    pub fn new(val: usize) -> Self {
        Self(val)
    }

    /// Move one cell right, unless already on the last cell of a tape of
    /// `len` cells.
    pub fn step_right(self, len: usize) -> Self {
        if self.0.saturating_add(1) < len {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// Move one cell left, unless already on cell 0.
    pub fn step_left(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<usize> for TapeAddr {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<TapeAddr> for usize {
    fn from(value: TapeAddr) -> Self {
        value.0
    }
}

impl Display for TapeAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A BF number (u8 with wrapping semantics).
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct BfNum(Wrapping<u8>);

impl BfNum {
    pub fn is_zero(&self) -> bool {
        self.0 .0 == 0
    }
}

impl Add for BfNum {
    type Output = BfNum;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for BfNum {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for BfNum {
    type Output = BfNum;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for BfNum {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for BfNum {
    fn from(value: i32) -> Self {
        Self(Wrapping::<u8>(value.rem_euclid(256) as u8))
    }
}

impl From<u8> for BfNum {
    fn from(value: u8) -> Self {
        Self(Wrapping::<u8>(value))
    }
}

impl From<BfNum> for u8 {
    fn from(value: BfNum) -> Self {
        value.0 .0
    }
}

impl Display for BfNum {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
