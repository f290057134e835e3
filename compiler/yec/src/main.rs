//! ye interpreter CLI.

use std::process::ExitCode;

use yec::commands::{
    check_file, explain_code, fmt_file, lex_file, parse_file, run_file, EXIT_USAGE,
};

fn main() -> ExitCode {
    yec::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::from(EXIT_USAGE);
    }

    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if matches!(command, "version" | "--version" | "-V") {
        println!("ye {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let handler: fn(&str) -> ExitCode = match command {
        "run" => run_file,
        "check" => check_file,
        "lex" => lex_file,
        "parse" => parse_file,
        "fmt" => fmt_file,
        "explain" => explain_code,
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match args.get(2..) {
        Some([arg]) => handler(arg),
        _ if command == "explain" => {
            eprintln!("Usage: ye explain <code>");
            ExitCode::from(EXIT_USAGE)
        }
        _ => {
            eprintln!("Usage: ye {command} <file.ye | ->");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn print_usage() {
    eprintln!("ye - a tiny declare, debug and compare language");
    eprintln!();
    eprintln!("Usage: ye <command> <file.ye | ->");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run      Evaluate a program; `de` lines go to stdout");
    eprintln!("  check    Lex and parse without evaluating");
    eprintln!("  lex      Print the token stream");
    eprintln!("  parse    Print the syntax tree");
    eprintln!("  fmt      Print the program in canonical form");
    eprintln!("  explain  Describe an error code, e.g. `ye explain E1001`");
    eprintln!("  help     Show this message");
    eprintln!("  version  Show the version");
    eprintln!();
    eprintln!("A path of `-` reads standard input.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  YE_LOG        tracing filter, e.g. YE_LOG=ye_parse=trace (falls back to RUST_LOG)");
    eprintln!("  YE_LOG_TREE   set to 1 for indented span-tree output");
}
