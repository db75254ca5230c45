use serde::Serialize;
use std::path::{Path, PathBuf};

/// Name of the output folder under the library root. Never scanned as input.
pub const GENRES_DIR: &str = "Genres";
/// Bucket for tracks without a genre tag
pub const NO_GENRE_DIR: &str = "No Genre";
/// Bucket for tracks whose name is already taken in their genre bucket
pub const DUPLICATE_DIR: &str = "Duplicate";

/// What to do with the rest of the run when one track fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first error
    #[default]
    Abort,
    /// Record the failure and keep going
    Continue,
}

/// How genres that are not valid folder names are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenrePolicy {
    /// Replace path separators and reserved characters with `_`
    #[default]
    Sanitize,
    /// Fail the track
    Reject,
}

#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    pub library_root: PathBuf,
    pub failure_policy: FailurePolicy,
    pub genre_policy: GenrePolicy,
}

impl OrganizeConfig {
    pub fn new(library_root: impl Into<PathBuf>) -> Self {
        Self {
            library_root: library_root.into(),
            failure_policy: FailurePolicy::default(),
            genre_policy: GenrePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_genre_policy(mut self, policy: GenrePolicy) -> Self {
        self.genre_policy = policy;
        self
    }

    pub fn layout(&self) -> LibraryLayout {
        LibraryLayout::new(&self.library_root)
    }
}

/// Paths of the output tree, all derived from the library root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryLayout {
    root: PathBuf,
}

impl LibraryLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/Genres`
    pub fn genres_dir(&self) -> PathBuf {
        self.root.join(GENRES_DIR)
    }

    /// `<root>/Genres/<bucket>`
    pub fn bucket_dir(&self, bucket_name: &str) -> PathBuf {
        self.genres_dir().join(bucket_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = LibraryLayout::new("/music");

        assert_eq!(layout.genres_dir(), PathBuf::from("/music/Genres"));
        assert_eq!(layout.bucket_dir("Rock"), PathBuf::from("/music/Genres/Rock"));
        assert_eq!(
            layout.bucket_dir(NO_GENRE_DIR),
            PathBuf::from("/music/Genres/No Genre")
        );
        assert_eq!(
            layout.bucket_dir(DUPLICATE_DIR),
            PathBuf::from("/music/Genres/Duplicate")
        );
    }

    #[test]
    fn test_config_defaults_to_strict_abort() {
        let config = OrganizeConfig::new("/music");

        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.genre_policy, GenrePolicy::Sanitize);
        assert_eq!(config.layout().root(), Path::new("/music"));
    }
}
