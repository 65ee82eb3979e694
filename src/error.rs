//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// corpus root does not exist.
    NotFound(PathBuf),
    /// corpus root exists but is not a directory.
    NotADirectory(PathBuf),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// a document could not be mapped into a [crate::types::Paper].
    /// Holds the offending path and the underlying cause
    /// (missing field, wrong shape, invalid JSON).
    Parse(PathBuf, serde_json::Error),
    Serde(serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
