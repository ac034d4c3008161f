use std::{path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("The data directory {0} is missing, nothing was processed")]
    MissingDataDir(PathBuf),

    #[error("Required input file {0} is missing, nothing was processed")]
    MissingInputFile(PathBuf),

    #[error("Column '{column}' not found in the header of {file}")]
    MissingColumn { file: String, column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ReconError>;
