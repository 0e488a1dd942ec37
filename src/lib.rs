pub mod aggregate;
pub mod cli;
pub mod error;
pub mod io_utils;
pub mod loader;
pub mod record;
pub mod region;
pub mod report;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug};

use crate::{
    cli::Cli,
    loader::LoadOptions,
    report::{Operation, ReportOptions},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("user_report", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let encoding = io_utils::resolve_encoding(cli.input_encoding.as_deref())
        .context("Resolving input encoding")?;
    let load_options = LoadOptions {
        delimiter: io_utils::resolve_input_delimiter(&cli.input, cli.delimiter),
        encoding,
    };
    debug!(
        "Loading '{}' with delimiter '{}' as {}",
        cli.input.display(),
        printable_delimiter(load_options.delimiter),
        encoding.name()
    );

    let users = loader::load_users(&cli.input, &load_options);
    if users.is_empty() {
        return Ok(());
    }

    let operation = match cli.operation.parse::<Operation>() {
        Ok(operation) => operation,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let options = ReportOptions {
        min_age: cli.min_age,
        top: cli.top,
    };
    debug!("Rendering {:?} over {} record(s)", operation, users.len());
    print!("{}", report::render(operation, &users, &options));
    Ok(())
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b',' => ",".to_string(),
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        other => (other as char).to_string(),
    }
}
