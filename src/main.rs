//! loxlex CLI - tokenize or flatten a Lox source file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loxlex::errors::{format_plain, print_errors};
use loxlex::{Scanned, render, scan};

/// Exit code used when the source has lexical errors
const EXIT_DATA_ERROR: u8 = 65;

#[derive(Parser)]
#[command(name = "loxlex")]
#[command(about = "Scan Lox source files", long_about = None)]
#[command(version)]
struct Cli {
    /// Show diagnostics with source context instead of one line each
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every token on its own line
    Tokenize {
        /// Source file to scan
        filename: PathBuf,
    },
    /// Print literals and parenthesis groups as one string
    Parse {
        /// Source file to scan
        filename: PathBuf,
    },
}

impl Commands {
    fn filename(&self) -> &Path {
        match self {
            Commands::Tokenize { filename } | Commands::Parse { filename } => filename.as_path(),
        }
    }
}

fn run(cli: &Cli) -> Result<Scanned> {
    let path = cli.command.filename();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Error reading file '{}'", path.display()))?;

    log::info!("scanning {} ({} bytes)", path.display(), source.len());
    let scanned = scan(&source);

    if scanned.has_errors() {
        if cli.pretty {
            print_errors(&source, &path.display().to_string(), &scanned.errors);
        } else {
            eprintln!("{}", format_plain(&scanned.errors));
        }
    }

    match cli.command {
        Commands::Tokenize { .. } => {
            for token in &scanned.tokens {
                println!("{}", token);
            }
        }
        Commands::Parse { .. } => println!("{}", render(&scanned.tokens)),
    }

    Ok(scanned)
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
        Ok(scanned) if scanned.has_errors() => ExitCode::from(EXIT_DATA_ERROR),
        Ok(_) => ExitCode::SUCCESS,
    }
}
