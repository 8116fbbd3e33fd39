// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LarderError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("recipe source not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("knowledge graph not found: {}", .0.display())]
    GraphMissing(PathBuf),

    #[error("unsupported source format: {0} (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, LarderError>;

// Allow `?` on std::io::Error by converting to LarderError::Io with unknown path.
impl From<std::io::Error> for LarderError {
    fn from(source: std::io::Error) -> Self {
        LarderError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl LarderError {
    /// Attaches a concrete path to a bare I/O error.
    #[must_use]
    pub fn io_at(source: std::io::Error, path: &std::path::Path) -> Self {
        LarderError::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}
