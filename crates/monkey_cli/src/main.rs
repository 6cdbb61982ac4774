//! monkey: command-line front end for the monkey scanner.
//!
//! Usage:
//!   monkey [repl]              scan lines typed (or piped) on stdin
//!   monkey tokens <FILE>...    scan source files

mod error;
mod output;
mod repl;
mod tokens;

use clap::{Parser as ClapParser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "MONKEY_LOG";

#[derive(ClapParser, Debug)]
#[command(name = "monkey", version, about = "Token scanner for the monkey language")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// How each token is printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read source one line at a time and print each line's tokens.
    Repl,

    /// Scan whole files and print their tokens.
    Tokens {
        /// Source files to scan.
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Exit with an error if any file contains ILLEGAL tokens.
        #[arg(long)]
        deny_illegal: bool,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => repl::run(cli.format)?,
        Command::Tokens {
            files,
            deny_illegal,
        } => tokens::run(&files, cli.format, deny_illegal)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_repl() {
        let cli = Cli::try_parse_from(["monkey"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_tokens_subcommand() {
        let cli = Cli::try_parse_from([
            "monkey",
            "tokens",
            "a.mk",
            "b.mk",
            "--deny-illegal",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Command::Tokens {
                files,
                deny_illegal,
            }) => {
                assert_eq!(files, vec![PathBuf::from("a.mk"), PathBuf::from("b.mk")]);
                assert!(deny_illegal);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_tokens_requires_files() {
        assert!(Cli::try_parse_from(["monkey", "tokens"]).is_err());
    }
}
