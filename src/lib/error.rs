use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to read font source '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Font source '{path}' has no content")]
    Empty { path: PathBuf },

    #[error("Invalid {field} '{text}' for glyph {code}")]
    InvalidMetric {
        field: &'static str,
        text: String,
        code: String,
    },

    #[error("{what} {value} does not fit the blob format")]
    OutOfRange { what: &'static str, value: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FontError>;
