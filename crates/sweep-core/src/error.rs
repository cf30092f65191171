// File: crates/sweep-core/src/error.rs
// Summary: Library error type. Nothing here is fatal to the frame loop; callers degrade to placeholder scenes.

use std::path::PathBuf;

use thiserror::Error;

pub type SweepResult<T> = Result<T, SweepError>;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("missing required column `{name}` in header")]
    MissingColumn { name: String },

    #[error("input has no header row")]
    EmptyInput,

    #[error("unsupported file type ({mime}): {}", path.display())]
    UnsupportedFile { path: PathBuf, mime: String },

    #[error("loader worker is gone")]
    LoaderGone,
}
