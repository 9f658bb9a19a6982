use crate::{
    ast::Program, settings::Settings, tape::FixedTape, ExecuteCallbackResult, ExecutionError,
    TapeAddr,
};

/// Instructions executed before a test run is cut off.
pub const STEP_LIMIT: usize = 500000;

#[derive(Debug, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub tape: FixedTape,
    pub tape_ptr: TapeAddr,
    pub output: Vec<u8>,
}

/// Run with the given settings, aborting after [`STEP_LIMIT`] instructions.
pub fn run_with_tape(
    program: &Program,
    settings: &Settings,
    input: &mut impl std::io::Read,
) -> ExecutionState {
    let mut instr_count = 0;
    let mut exec = ExecutionState {
        result: None,
        tape: FixedTape::from_settings(settings).expect("Test settings need a non-empty tape"),
        tape_ptr: TapeAddr::default(),
        output: Vec::new(),
    };
    exec.result = Some(crate::execute(
        program,
        &mut exec.tape,
        &mut exec.tape_ptr,
        settings,
        input,
        &mut exec.output,
        &mut |_, _, _| {
            instr_count += 1;
            if instr_count > STEP_LIMIT {
                ExecuteCallbackResult::Abort
            } else {
                ExecuteCallbackResult::Continue
            }
        },
    ));

    exec
}

/// Run with a small tape and otherwise default settings.
pub fn test_execute(program: &Program, input: &mut impl std::io::Read) -> ExecutionState {
    let settings = Settings {
        cell_count: 1024,
        ..Settings::default()
    };
    run_with_tape(program, &settings, input)
}
