//! Decides where a track goes.
//!
//! A track lands in `Genres/<Title Cased Genre>`, or in `Genres/No Genre` when
//! it has no genre. If that bucket already holds a file with the same name the
//! track goes to `Genres/Duplicate` instead. The first file seen for a name
//! keeps the genre slot; contents are never compared.

use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::{GenrePolicy, LibraryLayout, DUPLICATE_DIR, NO_GENRE_DIR};
use crate::directory;
use crate::error::{OrganizeError, Result};
use crate::utils;

/// A folder under `<root>/Genres`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Bucket {
    Genre(String),
    NoGenre,
    Duplicate,
}

impl Bucket {
    /// Bucket for a raw genre tag value.
    pub fn from_genre(raw: &str, policy: GenrePolicy) -> Result<Bucket> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Bucket::NoGenre);
        }

        let name = utils::title_case(trimmed);
        if !utils::has_unsafe_chars(&name) && !is_sentinel_name(&name) {
            return Ok(Bucket::Genre(name));
        }

        match policy {
            GenrePolicy::Sanitize => {
                let mut name = utils::sanitize_folder_name(&name);
                // A genre must never share a folder with "Duplicate" or "No Genre"
                if is_sentinel_name(&name) {
                    name.push('_');
                }
                Ok(Bucket::Genre(name))
            }
            GenrePolicy::Reject => Err(OrganizeError::UnsafeGenre {
                genre: raw.to_string(),
            }),
        }
    }

    pub fn folder_name(&self) -> &str {
        match self {
            Bucket::Genre(name) => name,
            Bucket::NoGenre => NO_GENRE_DIR,
            Bucket::Duplicate => DUPLICATE_DIR,
        }
    }
}

/// Case-insensitive, since the output tree may live on a case-insensitive filesystem
fn is_sentinel_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(DUPLICATE_DIR) || name.eq_ignore_ascii_case(NO_GENRE_DIR)
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementKind {
    /// Moved into its genre bucket
    Relocated,
    /// Genre bucket already had the name, moved to `Duplicate`
    Duplicated,
}

/// Outcome of [`PlacementResolver::resolve`]: the move to perform and the
/// folders that were created to make room for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Genre bucket the track was classified into, even when duplicated
    pub bucket: Bucket,
    pub kind: PlacementKind,
    pub created_dirs: Vec<PathBuf>,
}

impl Placement {
    pub fn destination_dir(&self) -> &Path {
        self.destination.parent().unwrap_or(self.destination.as_path())
    }
}

/// Computes destinations against the current state of the output tree.
/// Creates bucket folders as a side effect, but never moves anything.
#[derive(Debug, Clone)]
pub struct PlacementResolver {
    layout: LibraryLayout,
    genre_policy: GenrePolicy,
}

impl PlacementResolver {
    pub fn new(layout: LibraryLayout, genre_policy: GenrePolicy) -> Self {
        Self {
            layout,
            genre_policy,
        }
    }

    pub fn resolve(&self, source: &Path, file_name: &OsStr, genre: &str) -> Result<Placement> {
        let bucket = Bucket::from_genre(genre, self.genre_policy)?;
        let bucket_dir = self.layout.bucket_dir(bucket.folder_name());
        let mut created_dirs = Vec::new();

        if directory::ensure_directory(&bucket_dir)? {
            created_dirs.push(bucket_dir.clone());
        }

        let primary = bucket_dir.join(file_name);
        if !directory::entry_exists(&primary)? {
            debug!("{} -> {}", source.display(), primary.display());
            return Ok(Placement {
                source: source.to_path_buf(),
                destination: primary,
                bucket,
                kind: PlacementKind::Relocated,
                created_dirs,
            });
        }

        let duplicate_dir = self.layout.bucket_dir(Bucket::Duplicate.folder_name());
        if directory::ensure_directory(&duplicate_dir)? {
            created_dirs.push(duplicate_dir.clone());
        }

        let destination = duplicate_dir.join(file_name);
        if directory::entry_exists(&destination)? {
            warn!(
                "{} already exists and will be replaced by {}",
                destination.display(),
                source.display()
            );
        }

        Ok(Placement {
            source: source.to_path_buf(),
            destination,
            bucket,
            kind: PlacementKind::Duplicated,
            created_dirs,
        })
    }
}
