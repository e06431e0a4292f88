use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use basic_compiler::{compile, error::display_compile_error, logger, tokenize};
use clap::Parser;

/// Compile a BASIC program to C
#[derive(Parser, Debug)]
#[command(name = "basicc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to compile
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file [default: INPUT with a .c extension]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the generated C to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Print the token stream and exit without compiling
    #[arg(long)]
    tokens: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logger::init_with_level(logger::level_for_verbosity(args.verbose));

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;
    let filename = args.input.display().to_string();

    if args.tokens {
        return match tokenize(&source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{} {:?}", token.kind, token.text);
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                display_compile_error(&source, &filename, &e.into());
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let output = match compile(&source) {
        Ok(output) => output,
        Err(e) => {
            display_compile_error(&source, &filename, &e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.stdout {
        print!("{output}");
    } else {
        let path = args
            .output
            .unwrap_or_else(|| args.input.with_extension("c"));
        if path == args.input {
            bail!("Refusing to overwrite the input file: {}", path.display());
        }
        fs::write(&path, output)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}
