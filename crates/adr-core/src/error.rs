use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdrError {
    #[error("store not initialized at {}: run 'adr init'", .0.display())]
    NotInitialized(PathBuf),

    #[error("record not found: {0:04}")]
    RecordNotFound(u32),

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("status 'Superseded' requires the number of the superseding record")]
    MissingSupersededBy,

    #[error("superseding record not found: {0:04}")]
    SupersededByNotFound(u32),

    #[error("record {0:04} has no '## Status' section")]
    MissingStatusSection(u32),

    #[error("could not claim a record number after {0} attempts: the store is being written to concurrently, try again")]
    CreateContention(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdrError>;
