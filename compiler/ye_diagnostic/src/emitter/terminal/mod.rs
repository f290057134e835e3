//! Human-readable diagnostic output with optional ANSI color.
//!
//! ```text
//! error[E1001]: expected `;`, found end of input
//!   --> demo.ye:1:11
//!    |
//!  1 | ye x = 10
//!    |           ^ expected `;` here
//!   = note: the parse stage stopped here
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;


mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when writing to a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color and source snippets.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<(String, LineOffsetTable)>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach source text so labels render as `line:col` with a snippet.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        let table = LineOffsetTable::build(source);
        self.source = Some((source.to_string(), table));
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: &str) -> Self {
        self.file_path = Some(path.to_string());
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let location = self.location(label);
        let _ = writeln!(self.writer, "  --> {location}");

        let Some((source, table)) = &self.source else {
            let _ = write!(self.writer, "      ");
            self.write_label_message(label);
            return;
        };
        let (line, col) = table.offset_to_line_col(source, label.span.start);
        let text = table.line_text(source, line).unwrap_or_default().to_string();
        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);
        let caret_pad = " ".repeat(col.saturating_sub(1) as usize);
        let width = label_width(&text, col, label.span.len());
        let caret = "^".repeat(width);

        let _ = writeln!(self.writer, "  {pad} |");
        let _ = writeln!(self.writer, "  {line} | {text}");
        let _ = write!(self.writer, "  {pad} | {caret_pad}");
        self.write_colored(&caret, colors::ERROR);
        let _ = write!(self.writer, " ");
        self.write_label_message(label);
    }

    fn write_label_message(&mut self, label: &Label) {
        self.write_colored(&label.message, colors::ERROR);
        let _ = writeln!(self.writer);
    }

    fn location(&self, label: &Label) -> String {
        let path = self.file_path.as_deref().unwrap_or("<input>");
        match &self.source {
            Some((source, table)) => {
                let (line, col) = table.offset_to_line_col(source, label.span.start);
                format!("{path}:{line}:{col}")
            }
            None => format!("{path}@{:?}", label.span),
        }
    }
}

/// Number of carets under a label: at least one, never past the line end.
fn label_width(line_text: &str, col: u32, span_len: u32) -> usize {
    let remaining = line_text
        .chars()
        .count()
        .saturating_sub(col.saturating_sub(1) as usize);
    (span_len as usize).min(remaining).max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        let code = format!("[{}]", diagnostic.code);
        self.write_colored(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
