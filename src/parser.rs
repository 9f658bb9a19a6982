use thiserror::Error;

use crate::ast::*;

/// Parses source code, producing a stream of (source offset, instruction).
fn lexer(source_code: &'_ [u8]) -> impl Iterator<Item = (usize, Instruction)> + '_ {
    // Anything that isn't an instruction is a comment
    source_code
        .iter()
        .enumerate() // For keeping track of source location
        .filter_map(|(pos, c)| Instruction::from_byte(*c).map(|instr| (pos, instr)))
}

/// Errors from the optional bracket check
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// To many `[` encountered.
    #[error("Start of loop ([) at byte {source_loc} is never closed")]
    TooManyStartLoop { source_loc: usize },
    /// To many `]` encountered.
    #[error("End of loop (]) at byte {source_loc} has no matching start")]
    TooManyEndLoop { source_loc: usize },
}

/// Turn source code into a program.
///
/// This never fails: bytes outside `+-<>[].,` are skipped.
pub fn parse_source(source_code: &[u8]) -> Program {
    lexer(source_code)
        .map(|(pos, instr)| Operation::new(instr, pos))
        .collect()
}

/// Check that every `[` has a matching `]` and vice versa.
///
/// The interpreter does not need this (it reports unbalanced loops when it
/// reaches them), but it lets a caller reject a program before any of it
/// runs.
pub fn check_balance(program: &Program) -> Result<(), ParseError> {
    let mut open = vec![];
    for op in program.iter() {
        match op.opcode {
            Instruction::LoopStart => open.push(op.source_loc),
            Instruction::LoopEnd => {
                if open.pop().is_none() {
                    return Err(ParseError::TooManyEndLoop {
                        source_loc: op.source_loc,
                    });
                }
            }
            _ => (),
        }
    }
    match open.pop() {
        Some(source_loc) => Err(ParseError::TooManyStartLoop { source_loc }),
        None => Ok(()),
    }
}
