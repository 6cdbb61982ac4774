//! Line-at-a-time token printer.
//!
//! Every line gets a fresh scanner. Tokens are printed until END_OF_INPUT,
//! which itself is not printed.

use crate::error::CliError;
use crate::output::{write_token, OutputFormat};
use monkey_core::SourceText;
use monkey_scanner::Scanner;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, IsTerminal, Write};

pub const PROMPT: &str = ">> ";

/// Scan one line and write its tokens. Returns the number written.
pub fn print_line_tokens<W: Write>(
    out: &mut W,
    line: &[char],
    format: OutputFormat,
) -> io::Result<usize> {
    let mut scanner = Scanner::new(line);
    let mut count = 0;
    loop {
        let token = scanner.next_token();
        if token.is_end_of_input() {
            return Ok(count);
        }
        write_token(out, &token, format)?;
        count += 1;
    }
}

pub fn run(format: OutputFormat) -> Result<(), CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        tracing::debug!("stdin is a terminal, starting line editor");
        run_interactive(format)
    } else {
        let lines = run_lines(stdin.lock(), io::stdout().lock(), format, false)?;
        tracing::debug!(lines, "input stream exhausted");
        Ok(())
    }
}

/// Drive the loop from any buffered reader until it is exhausted.
///
/// Lines that are not valid UTF-8 are reported on `out` and skipped.
/// Returns the number of lines read.
pub fn run_lines<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    format: OutputFormat,
    show_prompt: bool,
) -> Result<usize, CliError> {
    let mut buf = Vec::new();
    let mut lines = 0;
    loop {
        if show_prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
        match SourceText::from_bytes(&buf) {
            Ok(line) => {
                print_line_tokens(&mut out, &line, format)?;
            }
            Err(e) => {
                tracing::debug!(line = lines, error = %e, "skipping undecodable line");
                writeln!(out, "error: line {lines}: {e}")?;
            }
        }
    }
    out.flush()?;
    Ok(lines)
}

fn run_interactive(format: OutputFormat) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new().map_err(CliError::readline)?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    tracing::debug!(error = %e, "could not record history entry");
                }
                let source = SourceText::from(line.as_str());
                let mut out = io::stdout().lock();
                print_line_tokens(&mut out, &source, format)?;
                out.flush()?;
            }
            Err(e) => {
                if let Some(result) = readline_outcome(e) {
                    return result;
                }
            }
        }
    }
}

/// How the editor loop reacts to a readline error. `None` keeps reading.
fn readline_outcome(err: ReadlineError) -> Option<Result<(), CliError>> {
    match err {
        ReadlineError::Interrupted => None,
        ReadlineError::Eof => Some(Ok(())),
        e => Some(Err(CliError::readline(e))),
    }
}
