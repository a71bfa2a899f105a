//! Error types for archive operations.

use skillkit_core::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while packaging a bundle.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Bundle path does not exist.
    #[error("Skill folder not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Bundle path exists but is not a directory.
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Bundle failed validation; carries the validator's reason unchanged.
    #[error("Validation failed: {0}")]
    ValidationFailed(#[source] ValidationError),

    /// Exclusion pattern is not a valid glob.
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Writing the archive failed.
    #[error("Error creating .skill file: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl From<std::io::Error> for PackageError {
    fn from(err: std::io::Error) -> Self {
        PackageError::Archive(err.into())
    }
}

/// Errors that can occur while reading a `.skill` archive.
#[derive(Debug, Error)]
pub enum InspectError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Archive has no entries at all.
    #[error("Archive is empty")]
    Empty,

    /// Entries are spread over more than one top-level folder.
    #[error("Expected a single top-level folder, found: {}", .0.join(", "))]
    MultipleRoots(Vec<String>),

    /// Missing required file in the archive.
    #[error("Missing required file: {0}")]
    MissingFile(String),

    /// Archived SKILL.md does not validate.
    #[error("Invalid skill: {0}")]
    InvalidSkill(#[source] ValidationError),
}
