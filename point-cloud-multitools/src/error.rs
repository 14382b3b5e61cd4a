use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed point record in {}: '{}'", .file.display(), .line)]
    MalformedRecord { file: PathBuf, line: String },

    #[error("source folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
