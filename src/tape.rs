//! Implementations of the BF tape

use crate::{settings::Settings, BfNum, TapeAddr, TapeError};

/// A trait implementing a tape for the BF program memory.
///
/// Addresses handed to a tape are always below [`Tape::len`]; the
/// interpreter clamps the pointer before it gets here.
pub trait Tape {
    fn len(&self) -> usize;
    fn get(&self, offset: TapeAddr) -> BfNum;
    fn set(&mut self, offset: TapeAddr, value: BfNum);
    fn modify(&mut self, offset: TapeAddr, diff: BfNum);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A zero initialised tape whose length never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTape {
    data: Box<[BfNum]>,
}

impl FixedTape {
    pub fn new(cells: usize) -> Result<Self, TapeError> {
        if cells == 0 {
            return Err(TapeError::ZeroLength);
        }
        Ok(Self {
            data: vec![BfNum::default(); cells].into_boxed_slice(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, TapeError> {
        Self::new(settings.cell_count)
    }

    /// Raw view of all cells
    pub fn cells(&self) -> &[BfNum] {
        &self.data
    }
}

impl Tape for FixedTape {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, offset: TapeAddr) -> BfNum {
        self.data[usize::from(offset)]
    }

    fn set(&mut self, offset: TapeAddr, value: BfNum) {
        self.data[usize::from(offset)] = value;
    }

    fn modify(&mut self, offset: TapeAddr, diff: BfNum) {
        self.data[usize::from(offset)] += diff;
    }
}
