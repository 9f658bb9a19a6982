use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::ast::*;
use crate::settings::{EofBehaviour, OutputMode, Settings};
use crate::tape::Tape;
use crate::TapeAddr;
use crate::TapeError;

/// Malformed loop structure found while running
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LoopError {
    /// A `]` was reached with no open `[`.
    #[error("End of loop (]) at byte {source_loc} has no matching start of loop")]
    UnmatchedEnd { source_loc: usize },
    /// The program ended while a `[` was still open.
    #[error("Start of loop ([) at byte {source_loc} is never closed")]
    UnterminatedStart { source_loc: usize },
}

/// Error type for execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Unbalanced loop.
    #[error("Loop error: {0}")]
    Loop(#[from] LoopError),
    /// Tape pointer error.
    #[error("Tape pointer error: {0}")]
    TapeError(#[from] TapeError),
    /// Io error during program execution.
    #[error("Unexpected IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Aborted by callback
    #[error("Callback aborted execution")]
    Aborted,
}

impl PartialEq for ExecutionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Loop(l0), Self::Loop(r0)) => l0 == r0,
            (Self::TapeError(l0), Self::TapeError(r0)) => l0 == r0,
            (Self::IoError(l0), Self::IoError(r0)) => l0.kind() == r0.kind(),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Data sent to execution callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExecuteCallbackData<'program> {
    /// We are about to execute this operation
    Op(&'program Operation),
    /// A `]` saw a non-zero cell and we are jumping back into the loop body
    LoopBack,
}

/// Reply type for callback
pub enum ExecuteCallbackResult {
    /// Continue execution
    Continue,
    /// Abort execution
    Abort,
}

/// Run `program` to completion against `tape`.
///
/// Loops are resolved with a stack of indices of the currently open `[`.
/// The loop condition is only tested at `]`, so a loop body always runs at
/// least once, even if the cell is zero when `[` is reached.
///
/// `tape_ptr` must point at a cell of `tape`; the moves keep it there.
pub fn execute<'program, TapeT: Tape, F>(
    program: &'program Program,
    tape: &mut TapeT,
    tape_ptr: &mut TapeAddr,
    settings: &Settings,
    input: &mut impl Read,
    output: &mut impl Write,
    callback: &mut F,
) -> Result<(), ExecutionError>
where
    F: FnMut(ExecuteCallbackData<'program>, &TapeT, &TapeAddr) -> ExecuteCallbackResult,
{
    if usize::from(*tape_ptr) >= tape.len() {
        return Err(TapeError::PointerOutOfRange {
            ptr: tape_ptr.0,
            len: tape.len(),
        }
        .into());
    }

    let ops = program.ops();
    let mut loop_stack: Vec<usize> = vec![];
    let mut cursor = 0;

    while let Some(op) = ops.get(cursor) {
        match callback(ExecuteCallbackData::Op(op), tape, tape_ptr) {
            ExecuteCallbackResult::Continue => (),
            ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
        }
        match op.opcode {
            Instruction::MoveRight => *tape_ptr = tape_ptr.step_right(tape.len()),
            Instruction::MoveLeft => *tape_ptr = tape_ptr.step_left(),
            Instruction::Increment => tape.modify(*tape_ptr, 1.into()),
            Instruction::Decrement => tape.modify(*tape_ptr, (-1).into()),
            Instruction::Output => {
                let value: u8 = tape.get(*tape_ptr).into();
                match settings.output_mode {
                    OutputMode::Raw => output.write_all(&[value])?,
                    OutputMode::Debug => {
                        write!(output, "{value} ")?;
                        output.write_all(&[value, b'\n'])?;
                    }
                }
            }
            Instruction::Input => {
                let mut tmp: [u8; 1] = [0; 1];
                // We may need to flush output here if there wasn't a newline.
                output.flush()?;
                match input.read(&mut tmp)? {
                    0 => match settings.eof {
                        EofBehaviour::Zero => tape.set(*tape_ptr, 0.into()),
                        EofBehaviour::Unchanged => (),
                    },
                    _ => tape.set(*tape_ptr, tmp[0].into()),
                }
            }
            Instruction::LoopStart => loop_stack.push(cursor),
            Instruction::LoopEnd => {
                let Some(&start) = loop_stack.last() else {
                    return Err(LoopError::UnmatchedEnd {
                        source_loc: op.source_loc,
                    }
                    .into());
                };
                if tape.get(*tape_ptr).is_zero() {
                    loop_stack.pop();
                } else {
                    match callback(ExecuteCallbackData::LoopBack, tape, tape_ptr) {
                        ExecuteCallbackResult::Continue => (),
                        ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
                    }
                    cursor = start + 1;
                    continue;
                }
            }
        }
        cursor += 1;
    }

    if let Some(&start) = loop_stack.last() {
        return Err(LoopError::UnterminatedStart {
            source_loc: ops[start].source_loc,
        }
        .into());
    }
    Ok(())
}
