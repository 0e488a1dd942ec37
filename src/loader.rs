//! Loads user records from a delimited file.
//!
//! Loading never fails outright. A missing file logs one diagnostic and yields
//! no records; a failure part-way through logs one diagnostic and keeps the
//! records read so far.

use std::{io::BufRead, path::Path};

use encoding_rs::{Encoding, UTF_8};
use log::{debug, error};

use crate::{
    error::LoadError,
    io_utils,
    record::{ColumnPositions, UserRecord},
};

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub encoding: &'static Encoding,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: io_utils::DEFAULT_CSV_DELIMITER,
            encoding: UTF_8,
        }
    }
}

pub fn load_users(path: &Path, options: &LoadOptions) -> Vec<UserRecord> {
    let input = match io_utils::open_input(path) {
        Ok(input) => input,
        Err(source) => {
            let err = LoadError::Open {
                path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
                source,
            };
            error!("{err}");
            return Vec::new();
        }
    };

    let mut users = Vec::new();
    if let Err(err) = read_users(input, options, &mut users) {
        error!("{err}");
    }
    debug!("Loaded {} user record(s) from {:?}", users.len(), path);
    users
}

/// Appends every data row of `input` to `users`.
///
/// The first line is always the header, even when it is empty. Rows already
/// pushed stay in `users` when an error is returned.
pub fn read_users<R: BufRead>(
    mut input: R,
    options: &LoadOptions,
    users: &mut Vec<UserRecord>,
) -> Result<(), LoadError> {
    let mut header_line = Vec::new();
    if input.read_until(b'\n', &mut header_line)? == 0 {
        return Ok(());
    }
    let positions = match io_utils::open_csv_reader(&header_line[..], options.delimiter)
        .byte_records()
        .next()
    {
        Some(header) => ColumnPositions::from_headers(&io_utils::decode_record(
            &header?,
            options.encoding,
        )?),
        None => ColumnPositions::default(),
    };
    debug!("Resolved column positions {:?}", positions);

    let mut reader = io_utils::open_csv_reader(input, options.delimiter);
    for record in reader.byte_records() {
        let row = io_utils::decode_record(&record?, options.encoding)
            .map_err(LoadError::after_header)?;
        if is_blank(&row, options.delimiter) {
            continue;
        }
        users.push(positions.record_from_row(&row));
    }
    Ok(())
}

/// A line is blank when it holds only whitespace. Fields arrive trimmed, so a
/// multi-field row is blank only if the delimiter itself is whitespace.
fn is_blank(row: &[String], delimiter: u8) -> bool {
    row.iter().all(|field| field.is_empty())
        && (row.len() <= 1 || delimiter.is_ascii_whitespace())
}
