//! Scanner CLI
//!
//! Usage: scanner <FILE>

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;
use thiserror::Error;
use tracing::{info, Level};

use scanner::{render_error, scan};

mod config;
mod logging;

use config::LogConfig;
use logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "scanner")]
#[command(version = "0.1.0")]
#[command(about = "Lexical analyzer for a small C-like language", long_about = None)]
struct Args {
    /// Source file to scan
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Log level for every target
    #[arg(long, value_name = "LEVEL", default_value_t = Level::WARN)]
    log_level: Level,

    /// Log level for the lexer only
    #[arg(long, value_name = "LEVEL")]
    lexer_log_level: Option<Level>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("could not read file '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
}

/// Reads the whole file, decoding lossily, with every line ending in `\n`.
fn read_source(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;

    Ok(normalize_lines(&String::from_utf8_lossy(&bytes)))
}

/// `\r\n`, `\r` and `\n` all end a line; the last line is terminated even
/// when the file is not.
fn normalize_lines(text: &str) -> String {
    let mut source = String::with_capacity(text.len() + 1);
    for line in text.replace("\r\n", "\n").replace('\r', "\n").split_terminator('\n') {
        source.push_str(line);
        source.push('\n');
    }
    source
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = LogConfig {
        global: args.log_level,
        lexer: args.lexer_log_level,
    };
    logging::init(&log_config, args.log_format);

    let source = match read_source(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    info!(target: "scanner::cli", file = %args.input.display(), "scanning");

    let (tokens, errors) = scan(&source);

    println!("---- Recognized tokens ----");
    for token in &tokens {
        println!("{}", token);
    }

    if errors.is_empty() {
        println!(
            "\n{}",
            "Compilation: SUCCESS. No lexical errors found.".green().bold()
        );
        return ExitCode::SUCCESS;
    }

    println!("\n{}", "Compilation: FAILED".red().bold());
    let file = args.input.display().to_string();
    for error in &errors {
        println!("{}", error);
        print!("{}", render_error(error, &source, &file));
    }

    ExitCode::FAILURE
}
