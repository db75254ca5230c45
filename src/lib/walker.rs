use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::audio;
use crate::config::GENRES_DIR;
use crate::error::{OrganizeError, Result};

/// Lazily walk `root` and yield the audio files that need organizing.
///
/// Any directory named `Genres` below the root is pruned, so nothing that was
/// already organized is visited again. Hidden files and files without an
/// mp3/flac extension are skipped. Traversal errors are yielded as they
/// happen and the caller decides whether to stop.
pub fn candidate_tracks(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_reserved_output(entry))
        .filter_map(|entry| match entry {
            Ok(entry) if is_candidate(&entry) => Some(Ok(entry.into_path())),
            Ok(entry) => {
                if !entry.file_type().is_dir() {
                    debug!("Skipping {}", entry.path().display());
                }
                None
            }
            Err(e) => Some(Err(OrganizeError::Traversal(e))),
        })
}

fn is_reserved_output(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == GENRES_DIR
}

fn is_candidate(entry: &DirEntry) -> bool {
    !entry.file_type().is_dir()
        && !audio::is_hidden(entry.path())
        && audio::is_supported_audio_file(entry.path())
}
