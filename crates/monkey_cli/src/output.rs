//! Token rendering.

use clap::ValueEnum;
use monkey_scanner::Token;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `KIND "text"`, one token per line.
    Text,
    /// One JSON object per line: `{"kind":"LET","text":"let"}`.
    Json,
}

pub fn write_token<W: Write>(out: &mut W, token: &Token, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{token}"),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, token)?;
            writeln!(out)
        }
    }
}
