//! shiftcrypt CLI - byte-shift files into `.encrypted` siblings and back.
//!
//! Not encryption: anyone can reverse the output without a key.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use shiftcrypt_rs::consts::{DEFAULT_CHUNK_SIZE, DIAGNOSTIC_TAIL_LEN, ENCRYPTED_SUFFIX};
use shiftcrypt_rs::utils::tail_hex;
use shiftcrypt_rs::{run_files, LogProgress, RoundTripRunner, ShiftcryptError, TransformDirection};
use std::path::{Path, PathBuf};

/// shiftcrypt - add/subtract one from every byte of a file (obfuscation only)
#[derive(Parser, Debug)]
#[command(name = "shiftcrypt")]
#[command(author, version, about = "Byte-shift file obfuscation (not secure encryption)", long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write `<PATH><suffix>` with every byte shifted up by one
    Encrypt(RunArgs),

    /// Write `<PATH>` minus its suffix with every byte shifted down by one
    Decrypt(RunArgs),

    /// Print the last 16 bytes of a file as hex
    Peek {
        /// File to inspect
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Files to process
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Marker appended on encrypt and stripped on decrypt
    #[arg(long, env = "SHIFTCRYPT_SUFFIX", default_value = ENCRYPTED_SUFFIX)]
    suffix: String,

    /// Bytes transformed between progress updates
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Process files concurrently
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Encrypt(args) => run(args, TransformDirection::Encode, cli.quiet),
        Commands::Decrypt(args) => run(args, TransformDirection::Decode, cli.quiet),
        Commands::Peek { path } => peek(&path),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: RunArgs, direction: TransformDirection, quiet: bool) -> Result<()> {
    let runner = RoundTripRunner::builder()
        .with_suffix(args.suffix)
        .with_chunk_size(args.chunk_size)
        .build()
        .context("invalid options")?;

    let results: Vec<Result<PathBuf, ShiftcryptError>> = if args.parallel {
        run_files(&runner, &args.paths, direction)
    } else {
        args.paths
            .iter()
            .map(|path| runner.run(path, direction, LogProgress::new(direction)))
            .collect()
    };

    let mut failed = 0usize;
    for (input, result) in args.paths.iter().zip(&results) {
        match result {
            Ok(output) if !quiet => {
                println!("{direction}ed {} -> {}", input.display(), output.display());
            }
            Ok(_) => {}
            Err(e) => {
                failed += 1;
                eprintln!("error: {e}");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} file(s) failed to {direction}", results.len());
    }
    Ok(())
}

fn peek(path: &Path) -> Result<()> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    println!("{}", tail_hex(&data, DIAGNOSTIC_TAIL_LEN));
    Ok(())
}
