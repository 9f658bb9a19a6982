#[cfg(target_os = "linux")]
use std::os::linux::fs::MetadataExt;

use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use thiserror::Error;

use clap::Parser;
use tinybf::{
    ast::Program,
    check_balance, execute, parse_source,
    settings::{EofBehaviour, OutputMode, Settings, DEFAULT_CELL_COUNT},
    tape::FixedTape,
    ExecuteCallbackData, ExecuteCallbackResult, ExecutionError, ParseError, TapeAddr, TapeError,
};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Parsing error: {0}")]
    ParserError(#[from] ParseError),
    #[error("Tape error: {0}")]
    TapeError(#[from] TapeError),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Brainfuck source file
    input_file: PathBuf,

    /// Number of cells on the tape
    #[arg(short, long, default_value_t = DEFAULT_CELL_COUNT)]
    cells: usize,

    /// How `.` writes the current cell
    #[arg(long, value_name = "MODE", default_value = "raw")]
    output_mode: OutputMode,

    /// What `,` stores once input is exhausted
    #[arg(long, value_name = "BEHAVIOUR", default_value = "zero")]
    eof: EofBehaviour,

    /// Refuse to run programs with unbalanced brackets
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Abort after executing this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Trace every executed instruction to stderr
    #[arg(long, default_value_t = false)]
    trace: bool,

    /// Developer mode: dump source and tokens, and use debug output
    #[arg(long, default_value_t = false)]
    dev: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            cell_count: self.cells,
            output_mode: if self.dev {
                OutputMode::Debug
            } else {
                self.output_mode
            },
            eof: self.eof,
        }
    }
}

fn dump_program(source: &[u8], program: &Program) {
    eprintln!("Content:\n{}", String::from_utf8_lossy(source));
    for op in program.iter() {
        eprintln!("Token: {}", op.opcode);
    }
}

fn run(args: &Args) -> Result<(), ProgramError> {
    let mut file = std::fs::File::open(&args.input_file)?;

    #[cfg(target_os = "linux")]
    let mut buf = Vec::with_capacity(file.metadata()?.st_size() as usize);
    #[cfg(not(target_os = "linux"))]
    let mut buf = Vec::new();

    file.read_to_end(&mut buf)?;

    let program = parse_source(buf.as_slice());

    if args.dev {
        dump_program(&buf, &program);
    }

    if args.check {
        check_balance(&program)?;
    }

    let settings = args.settings();
    let trace = args.trace;
    let max_steps = args.max_steps;
    let mut steps: u64 = 0;

    let mut tape = FixedTape::from_settings(&settings)?;
    let mut tape_ptr = TapeAddr::default();
    let mut stdout = io::stdout().lock();
    let result = execute(
        &program,
        &mut tape,
        &mut tape_ptr,
        &settings,
        &mut io::stdin().lock(),
        &mut stdout,
        &mut |data, _, tp| {
            if let ExecuteCallbackData::Op(op) = data {
                if trace {
                    dbg!((tp, op));
                }
                steps += 1;
                if max_steps.is_some_and(|max| steps > max) {
                    return ExecuteCallbackResult::Abort;
                }
            }
            ExecuteCallbackResult::Continue
        },
    );
    // Whatever was printed before a failure should still reach the terminal
    stdout.flush()?;
    result?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tinybf: {err}");
            ExitCode::FAILURE
        }
    }
}
