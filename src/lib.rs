//! # tinybf - A small Brainfuck interpreter
//!
//! Source text is lexed into a [`ast::Program`] (every byte outside
//! `+-<>[].,` is a comment) and then run by [`execute`] against a
//! fixed-size [`tape::FixedTape`]. The data pointer is clamped to the tape,
//! cells wrap modulo 256, and loops only test their condition at `]`.

// Re-export some symbols.
pub use interpreter::execute;
pub use interpreter::ExecuteCallbackData;
pub use interpreter::ExecuteCallbackResult;
pub use interpreter::ExecutionError;
pub use interpreter::LoopError;
pub use parser::check_balance;
pub use parser::parse_source;
pub use parser::ParseError;
pub use types::BfNum;
pub use types::TapeAddr;
pub use types::TapeError;

pub mod ast;
mod interpreter;
mod parser;
pub mod settings;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
