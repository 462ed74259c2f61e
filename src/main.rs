use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use turtle::{ast::ast::Node, display_error, lexer::lexer::tokenize, parser::parser::parse};

/// Front end for turtle script: lexes and parses a source file and reports
/// syntax errors.
#[derive(Parser, Debug)]
#[command(name = "turtle")]
#[command(version)]
#[command(about = "Lexer and parser for turtle script", long_about = None)]
struct Cli {
    /// Source file (.trtl)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree as JSON
    #[arg(long)]
    ast: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let source = read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {:?}", cli.input))?;

    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());
    debug!("Input file: {}", file_name);

    let start = Instant::now();

    if cli.tokens {
        for token in tokenize(&source) {
            println!("{}", token);
        }
        info!("Tokenized in {:?}", start.elapsed());
    }

    let parse_start = Instant::now();
    let (program, errors) = parse(&source);
    info!("Parsed in {:?}", parse_start.elapsed());

    if cli.ast {
        let json = serde_json::to_string_pretty(&program.data())
            .context("Failed to serialize the syntax tree")?;
        println!("{}", json);
    }

    for error in &errors {
        display_error(error, &source, &file_name);
    }

    info!("Total time: {:?}", start.elapsed());

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        if !cli.quiet {
            eprintln!("{} error(s) in {}", errors.len(), file_name);
        }
        Ok(ExitCode::FAILURE)
    }
}
