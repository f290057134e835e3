//! Command handlers for the `ye` CLI.
//!
//! Each handler reads its input, runs as much of the pipeline as it needs,
//! and returns the process exit code. Problems are rendered to stderr.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use ye_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use ye_diagnostic::ErrorCode;
use ye_lexer::KeywordTable;

use crate::{lex_source, parse_source, run_with, Problem, RunConfig};

/// Path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Exit code for a lex, parse or eval problem, or unreadable input.
const EXIT_PROBLEM: u8 = 1;
/// Exit code for bad command-line usage.
pub const EXIT_USAGE: u8 = 2;

/// Evaluate a program; `de` lines go to stdout.
pub fn run_file(path: &str) -> ExitCode {
    with_source(path, |source| {
        run_with(source, &RunConfig::default()).map(|_| ())
    })
}

/// Lex and parse only.
pub fn check_file(path: &str) -> ExitCode {
    with_source(path, |source| {
        let program = parse_source(source, &KeywordTable::default())?;
        println!("OK: {path} ({} statements)", program.statements.len());
        Ok(())
    })
}

/// Print one token per line.
pub fn lex_file(path: &str) -> ExitCode {
    with_source(path, |source| {
        for token in &lex_source(source, &KeywordTable::default())? {
            println!("{token:?}");
        }
        Ok(())
    })
}

/// Print the parsed tree.
pub fn parse_file(path: &str) -> ExitCode {
    with_source(path, |source| {
        let program = parse_source(source, &KeywordTable::default())?;
        println!("{program:#?}");
        Ok(())
    })
}

/// Print the program in canonical form.
pub fn fmt_file(path: &str) -> ExitCode {
    with_source(path, |source| {
        let program = parse_source(source, &KeywordTable::default())?;
        print!("{}", ye_fmt::format_program(&program));
        Ok(())
    })
}

/// Print the explanation for an error code such as `E1001`.
pub fn explain_code(code: &str) -> ExitCode {
    let Some(code) = ErrorCode::from_str_code(code) else {
        eprintln!("error: unknown error code '{code}'");
        eprintln!();
        eprintln!("Codes have the format EXXXX, where X is a digit.");
        eprintln!("Examples: E0001, E1001, E6003");
        return ExitCode::from(EXIT_PROBLEM);
    };
    println!("{code} ({} error)", code.stage());
    println!();
    println!("{}", code.explanation());
    ExitCode::SUCCESS
}

/// Read `path` (or stdin for `-`), or fail with a message.
pub fn read_source(path: &str) -> io::Result<String> {
    if path == STDIN_PATH {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

fn with_source(path: &str, command: impl FnOnce(&str) -> Result<(), Problem>) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read '{path}': {error}");
            return ExitCode::from(EXIT_PROBLEM);
        }
    };

    match command(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(problem) => {
            tracing::debug!(stage = problem.stage(), code = %problem.code(), "run failed");
            report(problem, &source, path);
            ExitCode::from(EXIT_PROBLEM)
        }
    }
}

fn report(problem: Problem, source: &str, path: &str) {
    let display_path = if path == STDIN_PATH { "<stdin>" } else { path };
    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty)
        .with_source(source)
        .with_file_path(display_path);
    emitter.emit(&problem.into_diagnostic());
    emitter.flush();
}
