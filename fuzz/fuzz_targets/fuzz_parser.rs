#![no_main]

use libfuzzer_sys::fuzz_target;

use tinybf::{check_balance, parse_source, ParseError};

fn check_loop_balance(data: &[u8]) -> Option<ParseError> {
    let mut open = vec![];
    for (pos, v) in data.iter().enumerate() {
        match v {
            b'[' => open.push(pos),
            b']' => {
                if open.pop().is_none() {
                    return Some(ParseError::TooManyEndLoop { source_loc: pos });
                }
            }
            _ => (),
        }
    }
    open.pop().map(|source_loc| ParseError::TooManyStartLoop { source_loc })
}

fuzz_target!(|data: &[u8]| {
    let program = parse_source(data);

    // Comments are dropped, instructions kept in order
    let stripped: Vec<u8> = data
        .iter()
        .copied()
        .filter(|c| b"+-<>[].,".contains(c))
        .collect();
    assert_eq!(program.len(), stripped.len());
    assert!(program
        .instructions()
        .eq(parse_source(&stripped).instructions()));
    for op in program.iter() {
        assert_eq!(data[op.source_loc], op.opcode.symbol() as u8);
    }

    assert_eq!(check_balance(&program).err(), check_loop_balance(data));
});
