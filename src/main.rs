use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use practical::compiler::{compile, entry_point, parse_program};

#[derive(Parser)]
#[command(name = "practical")]
#[command(about = "Compiles a practical syntax tree (JSON) into async JavaScript")]
struct Args {
    /// Syntax tree produced by the parser; read from stdin when omitted
    input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Emit::Js)]
    emit: Emit,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Generated JavaScript
    Js,
    /// Emission tree before flattening
    Tree,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(input: Option<&PathBuf>) -> Result<String> {
    if let Some(path) = input {
        return fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()));
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Reading stdin")?;
    Ok(buffer)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = read_source(args.input.as_ref())?;
    let origin = args
        .input
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |path| path.display().to_string());
    let program =
        parse_program(&source).with_context(|| format!("Parsing syntax tree from {origin}"))?;
    info!(statements = program.len(), "loaded syntax tree from {origin}");

    let mut output = match args.emit {
        Emit::Js => compile(&program).with_context(|| format!("Compiling {origin}"))?,
        Emit::Tree => {
            let tree = entry_point(&program).with_context(|| format!("Lowering {origin}"))?;
            format!("{tree:#?}")
        }
    };
    output.push('\n');

    match args.output {
        Some(path) => {
            fs::write(&path, &output).with_context(|| format!("Writing {}", path.display()))?;
            debug!("wrote {} bytes to {}", output.len(), path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}
