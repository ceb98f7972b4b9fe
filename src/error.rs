use std::io;
use thiserror::Error;

/// Errors that can escape a render call.
///
/// Font problems never appear here: a missing font file silently falls back
/// to builtin metrics, since layout code has no recovery path of its own.
#[derive(Error, Debug)]
pub enum CoverError {
    #[error("content unavailable: {0}")]
    ContentUnavailable(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to write image: {0}")]
    SinkWrite(#[from] io::Error),
}
