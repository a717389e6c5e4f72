//! bilex — reduce words to their English/German search lexemes

use anyhow::{Context, Result};
use bilex_core::BilingualDictionary;
use bilex_cli::output::{write_records, OutputFormat, TokenRecord};
use clap::Parser;
use std::io::Read;

#[derive(Debug, Parser)]
#[command(
    name = "bilex",
    version,
    about = "Reduce words to their English/German search lexemes"
)]
struct Cli {
    /// Words to lexize; reads whitespace-separated tokens from stdin when empty
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Ambient encoding label the dictionary is negotiated for
    #[arg(short, long, value_name = "LABEL", default_value = "utf-8")]
    encoding: String,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let dictionary = BilingualDictionary::builder()
        .encoding(&cli.encoding)
        .build()
        .context("failed to construct dictionary")?;
    log::debug!(
        "dictionary ready, ambient encoding {}",
        dictionary.ambient_encoding_name()
    );

    let words = gather_words(&cli)?;
    let mut records = Vec::with_capacity(words.len());
    for word in words {
        match dictionary.lexize_str(&word) {
            Ok(lexemes) => records.push(TokenRecord::new(word, lexemes.into_vec())),
            // a failed word aborts only itself; the dictionary stays usable
            Err(err) => log::warn!("skipping \"{word}\": {err}"),
        }
    }

    write_records(std::io::stdout().lock(), cli.format, &records)
}

/// Tokens from the command line, or whitespace-split stdin when none given
fn gather_words(cli: &Cli) -> Result<Vec<String>> {
    if !cli.words.is_empty() {
        return Ok(cli.words.clone());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer.split_whitespace().map(str::to_string).collect())
}

/// Initialize logging based on verbosity level
fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
