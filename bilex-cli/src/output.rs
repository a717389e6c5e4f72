//! Output formatting for lexize results

use anyhow::Result;
use bilex_core::{query_expression, Lexeme};
use serde::Serialize;
use std::io::Write;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `word<TAB>query expression` line per token
    Text,
    /// JSON array of per-token records
    Json,
}

/// Lexize result for one input token
#[derive(Debug, Serialize)]
pub struct TokenRecord {
    /// The token as given on the command line or stdin
    pub word: String,
    /// Lexemes the dictionary produced, in order
    pub lexemes: Vec<Lexeme>,
    /// The lexemes joined with `&`/`|` query semantics
    pub query: String,
}

impl TokenRecord {
    /// Build a record from a token and its lexemes
    pub fn new(word: String, lexemes: Vec<Lexeme>) -> TokenRecord {
        let query = query_expression(&lexemes);
        TokenRecord {
            word,
            lexemes,
            query,
        }
    }
}

/// Write records in the chosen format
pub fn write_records<W: Write>(
    mut writer: W,
    format: OutputFormat,
    records: &[TokenRecord],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(writer, "{}\t{}", record.word, record.query)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TokenRecord> {
        vec![TokenRecord::new(
            "running".to_string(),
            vec![Lexeme::new("run", false), Lexeme::new("running", true)],
        )]
    }

    #[test]
    fn text_format_is_word_tab_query() {
        let mut buf = Vec::new();
        write_records(&mut buf, OutputFormat::Text, &sample()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "running\trun | running\n");
    }

    #[test]
    fn json_format_carries_variant_flags() {
        let mut buf = Vec::new();
        write_records(&mut buf, OutputFormat::Json, &sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["word"], "running");
        assert_eq!(parsed[0]["lexemes"][1]["is_variant"], true);
        assert_eq!(parsed[0]["query"], "run | running");
    }
}
