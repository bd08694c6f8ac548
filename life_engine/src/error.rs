/// Errors produced while building boards, reading board files or persisting replays.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A board or grid was requested with a zero dimension, ragged rows or a size that does not
    /// match the supplied grid.
    #[error("invalid board dimensions: {reason}")]
    InvalidDimensions { reason: String },

    /// A board text file could not be parsed. `line` is 1-based.
    #[error("malformed board file at line {line}: {reason}")]
    MalformedBoardFile { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_dimensions(reason: impl Into<String>) -> Error {
        Error::InvalidDimensions {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Error {
        Error::MalformedBoardFile {
            line,
            reason: reason.into(),
        }
    }
}
