//! Error types shared by the transform core and its file glue

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DftError {
    #[error("Error reading file {}: {source}", path.display())]
    InputReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line} is not a decimal number: {content:?}")]
    MalformedSample { line: usize, content: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Error writing file {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DftError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DftError::InvalidParameter(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DftError>;
