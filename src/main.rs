use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use spell_lsp::log;
use spell_lsp::lsp::lifecycle::Termination;
use spell_lsp::lsp::server::run_server;
use spell_lsp::spelling::WordSet;

/// Language server that flags words missing from a word list
#[derive(Parser, Debug)]
#[command(name = "spell-lsp", version, about)]
struct Cli {
    /// Dictionary file; Hunspell format or a plain-text word list
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: PathBuf,

    /// Input handle; defaults to stdin
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output handle; defaults to stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log file; defaults to spell-lsp.log in the data directory
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if log::init(cli.log_file.as_deref()).is_err() {
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(termination) => termination.into(),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("spell-lsp: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Termination> {
    let words = WordSet::load(&cli.file)?;

    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open input {:?}", path))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to open output {:?}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    run_server(input, output, words)
}
