//! Types for the instruction stream.

use std::fmt::Display;

/// The eight instructions of the language. None of them carry operands.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Instruction {
    /// `>`
    MoveRight,
    /// `<`
    MoveLeft,
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
}

impl Instruction {
    /// Map a source byte to an instruction, if it is one.
    pub fn from_byte(c: u8) -> Option<Self> {
        match c {
            b'>' => Some(Self::MoveRight),
            b'<' => Some(Self::MoveLeft),
            b'+' => Some(Self::Increment),
            b'-' => Some(Self::Decrement),
            b'.' => Some(Self::Output),
            b',' => Some(Self::Input),
            b'[' => Some(Self::LoopStart),
            b']' => Some(Self::LoopEnd),
            _ => None,
        }
    }

    /// The source character for this instruction.
    pub fn symbol(&self) -> char {
        match self {
            Self::MoveRight => '>',
            Self::MoveLeft => '<',
            Self::Increment => '+',
            Self::Decrement => '-',
            Self::Output => '.',
            Self::Input => ',',
            Self::LoopStart => '[',
            Self::LoopEnd => ']',
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An instruction together with where it came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Operation {
    pub opcode: Instruction,
    /// Byte offset of the instruction in the source buffer
    pub source_loc: usize,
}

impl Operation {
    pub fn new(opcode: Instruction, source_loc: usize) -> Self {
        Self { opcode, source_loc }
    }
}

/// A lexed program: the instructions in source order.
///
/// Immutable once built. Loop targets are plain indices into this sequence.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Program {
    ops: Vec<Operation>,
}

impl Program {
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Operation> {
        self.ops.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.ops.iter()
    }

    /// Just the opcodes, without source locations.
    pub fn instructions(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.ops.iter().map(|op| op.opcode)
    }
}

impl FromIterator<Operation> for Program {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for op in &self.ops {
            write!(f, "{}", op.opcode)?;
        }
        Ok(())
    }
}
