#![no_main]

use libfuzzer_sys::fuzz_target;
use tinybf::execute;
use tinybf::settings::Settings;
use tinybf::tape::FixedTape;
use tinybf::tape::Tape;
use tinybf::ExecuteCallbackResult;
use tinybf::ExecutionError;
use tinybf::TapeAddr;
use tinybf_fuzz::FuzzInputProgram;

fuzz_target!(|data: FuzzInputProgram| {
    let program = data.program;
    let mut input = data.input;
    let settings = Settings {
        cell_count: data.cells.max(1).into(),
        ..Settings::default()
    };

    let mut instr_count = 0;
    let mut tape = FixedTape::from_settings(&settings).unwrap();
    let mut tape_ptr = TapeAddr::default();
    let mut output: Vec<u8> = Vec::new();
    let exec_result = execute(
        &program,
        &mut tape,
        &mut tape_ptr,
        &settings,
        &mut input,
        &mut output,
        &mut |_, tape, tp| {
            assert!(usize::from(*tp) < tape.len());
            instr_count += 1;
            if instr_count > 500 {
                ExecuteCallbackResult::Abort
            } else {
                ExecuteCallbackResult::Continue
            }
        },
    );
    match exec_result {
        Ok(_) => (),
        Err(err) => match err {
            ExecutionError::Loop(_) => (),
            ExecutionError::TapeError(err) => panic!("Pointer started off the tape: {err}"),
            ExecutionError::IoError(_) => (),
            ExecutionError::Aborted => (),
        },
    }
    assert!(usize::from(tape_ptr) < settings.cell_count);
});
