#![no_main]

use libfuzzer_sys::fuzz_target;

use tinybf::{check_balance, parse_source, test_utils::test_execute, ExecutionError};
use tinybf_fuzz::FuzzInputSrc;

fuzz_target!(|data: FuzzInputSrc| {
    let program = parse_source(data.code.as_slice());
    let exec = test_execute(&program, &mut data.input.clone());
    match exec.result.unwrap() {
        Ok(()) => assert_eq!(check_balance(&program), Ok(())),
        // Unbalanced programs only fail once they reach the bad bracket
        Err(ExecutionError::Loop(_)) => assert!(check_balance(&program).is_err()),
        Err(ExecutionError::Aborted) => (),
        Err(ExecutionError::TapeError(err)) => panic!("Unexpected tape error: {err}"),
        Err(ExecutionError::IoError(err)) => panic!("Unexpected IO error: {err}"),
    }
});
