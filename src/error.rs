use std::{io, path::PathBuf};

use thiserror::Error;

use crate::report::OPERATION_NAMES;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read CSV at {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading CSV: {0}")]
    Io(#[from] io::Error),

    #[error("Error reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Error reading CSV: failed to decode line {line} as {encoding}")]
    Decode { line: u64, encoding: &'static str },
}

impl LoadError {
    /// Shifts a decode error's line number past the header line, which is
    /// read ahead of the row reader.
    pub fn after_header(self) -> Self {
        match self {
            LoadError::Decode { line, encoding } => LoadError::Decode {
                line: line + 1,
                encoding,
            },
            other => other,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Unknown operation '{0}'. Use {names}.", names = OPERATION_NAMES.join("|"))]
    UnknownOperation(String),
}
