use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INPUT: &str = "users.csv";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Summarize a CSV file of user records",
    long_about = None
)]
pub struct Cli {
    /// Report to produce: summary, filter, group, avg, top or region
    #[arg(value_name = "OPERATION", default_value = "summary")]
    pub operation: String,
    /// Input CSV file with name, age and country columns ('-' reads stdin)
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Minimum age used by the filter report
    #[arg(long = "min-age", default_value_t = 30, allow_negative_numbers = true)]
    pub min_age: i32,
    /// Number of users listed by the top report
    #[arg(long, default_value_t = 3)]
    pub top: usize,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
