//! Errors reported by the `monkey` binary.

use miette::Diagnostic;
use monkey_core::SourceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("could not load `{}`", path.display())]
    #[diagnostic(
        code(monkey::source),
        help("source files must be readable and encoded as UTF-8")
    )]
    Source {
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    #[error("could not load {failed} of {total} file(s)")]
    #[diagnostic(
        code(monkey::files_not_loaded),
        help("the remaining files were scanned; see the errors above")
    )]
    FilesNotLoaded { failed: usize, total: usize },

    #[error("found {count} ILLEGAL token(s) in {files} file(s)")]
    #[diagnostic(
        code(monkey::illegal_characters),
        help("ILLEGAL tokens mark characters that are not part of the language")
    )]
    IllegalCharacters { count: usize, files: usize },

    #[error("line editor failed: {message}")]
    #[diagnostic(code(monkey::readline))]
    Readline { message: String },

    #[error("I/O error: {0}")]
    #[diagnostic(code(monkey::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn readline(err: impl std::fmt::Display) -> Self {
        CliError::Readline {
            message: err.to_string(),
        }
    }
}
