//! Fuzzing helper types

use std::collections::VecDeque;

use tinybf::ast::Program;

#[derive(Debug, arbitrary::Arbitrary)]
pub struct FuzzInputProgram {
    pub program: Program,
    pub cells: u16,
    pub input: VecDeque<u8>,
}

#[derive(Debug, arbitrary::Arbitrary)]
pub struct FuzzInputSrc {
    pub code: Vec<u8>,
    pub input: VecDeque<u8>,
}
