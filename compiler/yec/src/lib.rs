//! Driver for the ye pipeline.
//!
//! Runs lex, parse and evaluate in order over one source string and
//! surfaces the first problem from whichever stage fails. Every call builds
//! its own tokens, tree and environment; nothing is shared between runs.

pub mod commands;
mod problem;
mod tracing_setup;

pub use problem::Problem;
pub use tracing_setup::init_tracing;

use tracing::instrument;
use ye_eval::{stdout_handler, Environment, Interpreter, Outcome, SharedPrintHandler};
use ye_ir::{Program, TokenList};
use ye_lexer::KeywordTable;

/// Per-run configuration.
#[derive(Clone)]
pub struct RunConfig {
    /// Words the lexer reserves as keywords.
    pub keywords: KeywordTable,
    /// Destination for `de` output.
    pub print: SharedPrintHandler,
}

impl RunConfig {
    /// Default keywords, printing to stdout.
    pub fn new() -> Self {
        RunConfig {
            keywords: KeywordTable::default(),
            print: stdout_handler(),
        }
    }

    #[must_use]
    pub fn with_print(mut self, print: SharedPrintHandler) -> Self {
        self.print = print;
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What a successful run leaves behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutput {
    /// One outcome per top-level statement.
    pub outcomes: Vec<Outcome>,
    /// Final bindings.
    pub environment: Environment,
}

/// Run `source` with the default configuration.
pub fn run(source: &str) -> Result<RunOutput, Problem> {
    run_with(source, &RunConfig::default())
}

/// Lex, parse and evaluate `source`.
#[instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn run_with(source: &str, config: &RunConfig) -> Result<RunOutput, Problem> {
    let program = parse_source(source, &config.keywords)?;
    let mut interpreter = Interpreter::new(SharedPrintHandler::clone(&config.print));
    let outcomes = interpreter.eval_program(&program)?;
    Ok(RunOutput {
        outcomes,
        environment: interpreter.into_environment(),
    })
}

/// Lex `source` only.
pub fn lex_source(source: &str, keywords: &KeywordTable) -> Result<TokenList, Problem> {
    Ok(ye_lexer::lex_with(source, keywords)?)
}

/// Lex and parse `source` without evaluating it.
pub fn parse_source(source: &str, keywords: &KeywordTable) -> Result<Program, Problem> {
    let tokens = lex_source(source, keywords)?;
    Ok(ye_parse::parse(&tokens)?)
}
