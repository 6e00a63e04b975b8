//! wavcodec CLI - Command-line interface for PCM WAVE files
//!
//! This binary inspects, dumps and re-encodes canonical 44-byte-header WAVE
//! files using the `wavcodec` reader and writer.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use wavcodec_cli::commands;

/// wavcodec - PCM WAVE reader and writer
#[derive(Parser)]
#[command(name = "wavcodec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header of a WAVE file
    Info {
        /// Path to the WAVE file
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print decoded frames from the start of a WAVE file
    Dump {
        /// Path to the WAVE file
        input: String,

        /// Maximum number of frames to print
        #[arg(short = 'n', long, default_value_t = 16)]
        frames: u32,

        /// Decode samples as 32-bit floats
        #[arg(long)]
        float: bool,
    },

    /// Re-encode a WAVE file frame by frame
    Copy {
        /// Source WAVE file
        input: String,

        /// Destination path (overwritten)
        output: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Info { input, json } => commands::info::run(&input, json),
        Commands::Dump {
            input,
            frames,
            float,
        } => commands::dump::run(&input, frames, float),
        Commands::Copy { input, output } => commands::copy::run(&input, &output),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
