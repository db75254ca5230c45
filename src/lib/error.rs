use std::io;
use std::path::PathBuf;

use lofty::error::LoftyError;
use thiserror::Error;

/// Every way a run can stop (or a single track can fail under `--keep-going`).
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("could not resolve the home directory for '{0}'")]
    HomeDirectory(String),

    #[error("failed to walk music library: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("failed to open '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read tags from '{}': {source}", .path.display())]
    TagRead { path: PathBuf, source: LoftyError },

    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to check whether '{}' exists: {source}", .path.display())]
    ExistenceCheck { path: PathBuf, source: io::Error },

    #[error("failed to move '{}' to '{}': {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("genre '{genre}' cannot be used as a folder name")]
    UnsafeGenre { genre: String },

    #[error("'{}' has no file name", .path.display())]
    MissingFileName { path: PathBuf },
}

impl OrganizeError {
    /// The file or directory the error is about, when there is one.
    pub fn path(&self) -> Option<PathBuf> {
        match self {
            OrganizeError::HomeDirectory(_) | OrganizeError::UnsafeGenre { .. } => None,
            OrganizeError::Traversal(e) => e.path().map(|p| p.to_path_buf()),
            OrganizeError::Open { path, .. }
            | OrganizeError::TagRead { path, .. }
            | OrganizeError::CreateDir { path, .. }
            | OrganizeError::ExistenceCheck { path, .. }
            | OrganizeError::MissingFileName { path } => Some(path.clone()),
            OrganizeError::Move { from, .. } => Some(from.clone()),
        }
    }
}

pub type Result<T, E = OrganizeError> = std::result::Result<T, E>;
