//! tinyc CLI
//!
//! The `tinyc` command compiles s-expression source into C-style calls and
//! exposes each pipeline stage for inspection.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tinyc_compiler::{compile, generate_json, parse, tokenize, transform, CompileError};
use tracing_subscriber::EnvFilter;

/// Path argument meaning standard input.
const STDIN: &str = "-";

#[derive(Parser)]
#[command(name = "tinyc")]
#[command(version)]
#[command(about = "Compile Lisp-style calls into C-style calls", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a source file
    Compile {
        /// Input file, or - for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Tokenize a file and print one token per line
    Tokenize {
        /// Input file, or - for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Parse a file and print the source AST as JSON
    Parse {
        /// Input file, or - for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Transform a file and print the target AST as JSON
    Transform {
        /// Input file, or - for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render a target AST given as JSON
    Generate {
        /// JSON file, or - for stdin
        #[arg(value_name = "JSON_FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CompileError> {
    match command {
        Commands::Compile { input, output } => {
            let source = read_input(&input)?;
            let compiled = compile(&source)?;

            match output {
                Some(path) => {
                    fs::write(&path, format!("{compiled}\n"))
                        .map_err(|e| CompileError::io(path.display().to_string(), e))?;
                    tracing::info!(path = %path.display(), "wrote output");
                }
                None => println!("{compiled}"),
            }
        }

        Commands::Tokenize { input } => {
            for token in tokenize(&read_input(&input)?)? {
                println!("{token}");
            }
        }

        Commands::Parse { input } => {
            let program = parse(tokenize(&read_input(&input)?)?)?;
            let tree = tinyc_parser::serialized::to_serialized(&program);
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }

        Commands::Transform { input } => {
            let program = transform(&parse(tokenize(&read_input(&input)?)?)?);
            let tree = tinyc_transform::serialized::to_serialized(&program);
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }

        Commands::Generate { input } => {
            println!("{}", generate_json(&read_input(&input)?)?);
        }
    }

    Ok(())
}

/// Read a whole file, or all of stdin for `-`.
fn read_input(path: &Path) -> Result<String, CompileError> {
    if path.as_os_str() == STDIN {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| CompileError::io("<stdin>", e))?;
        return Ok(source);
    }

    fs::read_to_string(path).map_err(|e| CompileError::io(path.display().to_string(), e))
}
