//! `monkey tokens`: scan whole files.

use crate::error::CliError;
use crate::output::{write_token, OutputFormat};
use monkey_core::{read_source_file, SourceError};
use monkey_scanner::{tokenize, Token};
use rayon::prelude::*;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Load and scan every file in parallel. Results keep the order of `files`.
pub fn scan_files(files: &[PathBuf]) -> Vec<Result<Vec<Token>, SourceError>> {
    files
        .par_iter()
        .map(|path| -> Result<Vec<Token>, SourceError> {
            let source = read_source_file(path)?;
            let tokens = tokenize(&source);
            tracing::debug!(path = %path.display(), tokens = tokens.len(), "scanned file");
            Ok(tokens)
        })
        .collect()
}

/// Write one file's tokens, optionally under a `==> path <==` header.
pub fn write_file_tokens<W: Write>(
    out: &mut W,
    path: &Path,
    tokens: &[Token],
    format: OutputFormat,
    with_header: bool,
) -> io::Result<()> {
    if with_header {
        writeln!(out, "==> {} <==", path.display())?;
    }
    for token in tokens {
        write_token(out, token, format)?;
    }
    Ok(())
}

/// What happened while writing a batch of scanned files.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Files that could not be loaded, in input order.
    pub failures: Vec<CliError>,
    pub illegal_count: usize,
    pub illegal_files: usize,
}

/// Write every successfully scanned file to `out` in input order.
///
/// A file that failed to load is collected in the summary and skipped; the
/// files after it are still written.
pub fn write_scanned<W: Write>(
    out: &mut W,
    files: &[PathBuf],
    scanned: Vec<Result<Vec<Token>, SourceError>>,
    format: OutputFormat,
) -> io::Result<ScanSummary> {
    let with_header = files.len() > 1;
    let mut summary = ScanSummary::default();

    for (path, result) in files.iter().zip(scanned) {
        let tokens = match result {
            Ok(tokens) => tokens,
            Err(source) => {
                tracing::debug!(path = %path.display(), error = %source, "skipping file");
                summary.failures.push(CliError::Source {
                    path: path.clone(),
                    source,
                });
                continue;
            }
        };
        write_file_tokens(out, path, &tokens, format, with_header)?;

        let illegal = tokens.iter().filter(|t| t.is_illegal()).count();
        if illegal > 0 {
            tracing::debug!(path = %path.display(), illegal, "file contains illegal characters");
            summary.illegal_count += illegal;
            summary.illegal_files += 1;
        }
    }
    Ok(summary)
}

pub fn run(files: &[PathBuf], format: OutputFormat, deny_illegal: bool) -> Result<(), CliError> {
    let scanned = scan_files(files);
    let mut out = BufWriter::new(io::stdout().lock());
    let summary = write_scanned(&mut out, files, scanned, format)?;
    out.flush()?;

    if !summary.failures.is_empty() {
        let failed = summary.failures.len();
        for failure in summary.failures {
            eprintln!("{:?}", miette::Report::new(failure));
        }
        return Err(CliError::FilesNotLoaded {
            failed,
            total: files.len(),
        });
    }
    if deny_illegal && summary.illegal_count > 0 {
        return Err(CliError::IllegalCharacters {
            count: summary.illegal_count,
            files: summary.illegal_files,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_scanner::TokenKind;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn temp_source(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_scan_files_preserves_order() {
        let first = temp_source(b"let a = 1;");
        let second = temp_source(b"b >= 2");
        let files = vec![first.path().to_path_buf(), second.path().to_path_buf()];

        let results = scan_files(&files);
        assert_eq!(results.len(), 2);
        let first_tokens = results[0].as_ref().unwrap();
        let second_tokens = results[1].as_ref().unwrap();
        assert_eq!(first_tokens[0].kind, TokenKind::Let);
        assert_eq!(second_tokens[1], Token::new(TokenKind::GreaterEqual, ">="));
        assert!(first_tokens.last().unwrap().is_end_of_input());
        assert!(second_tokens.last().unwrap().is_end_of_input());
    }

    #[test]
    fn test_scan_files_reports_each_failure() {
        let good = temp_source(b"x");
        let bad = temp_source(b"\xc0\xc0");
        let files = vec![
            good.path().to_path_buf(),
            bad.path().to_path_buf(),
            PathBuf::from("missing/file.mk"),
        ];

        let results = scan_files(&files);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(SourceError::InvalidUtf8 { offset: 0 })));
        assert!(matches!(results[2], Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_write_file_tokens_with_header() {
        let tokens = vec![
            Token::new(TokenKind::Illegal, "@"),
            Token::end_of_input(),
        ];
        let mut out = Vec::new();
        write_file_tokens(&mut out, Path::new("a.mk"), &tokens, OutputFormat::Text, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "==> a.mk <==\nILLEGAL \"@\"\nEND_OF_INPUT \"\"\n"
        );
    }

    #[test]
    fn test_write_file_tokens_without_header() {
        let tokens = vec![Token::end_of_input()];
        let mut out = Vec::new();
        write_file_tokens(&mut out, Path::new("a.mk"), &tokens, OutputFormat::Text, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "END_OF_INPUT \"\"\n");
    }

    #[test]
    fn test_write_scanned_continues_past_failed_file() {
        let first = temp_source(b"a");
        let bad = temp_source(b"x\xff");
        let third = temp_source(b"c @");
        let files = vec![
            first.path().to_path_buf(),
            bad.path().to_path_buf(),
            third.path().to_path_buf(),
        ];

        let mut out = Vec::new();
        let summary = write_scanned(&mut out, &files, scan_files(&files), OutputFormat::Text).unwrap();

        let expected = format!(
            "==> {} <==\n\
             IDENTIFIER \"a\"\n\
             END_OF_INPUT \"\"\n\
             ==> {} <==\n\
             IDENTIFIER \"c\"\n\
             ILLEGAL \"@\"\n\
             END_OF_INPUT \"\"\n",
            first.path().display(),
            third.path().display(),
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);

        assert_eq!(summary.failures.len(), 1);
        match &summary.failures[0] {
            CliError::Source { path, source } => {
                assert_eq!(path.as_path(), bad.path());
                assert!(matches!(source, SourceError::InvalidUtf8 { offset: 1 }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(summary.illegal_count, 1);
        assert_eq!(summary.illegal_files, 1);
    }

    #[test]
    fn test_write_scanned_single_file_has_no_header() {
        let only = temp_source(b"1");
        let files = vec![only.path().to_path_buf()];

        let mut out = Vec::new();
        let summary = write_scanned(&mut out, &files, scan_files(&files), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "INT \"1\"\nEND_OF_INPUT \"\"\n");
        assert!(summary.failures.is_empty());
        assert_eq!(summary.illegal_count, 0);
    }
}
