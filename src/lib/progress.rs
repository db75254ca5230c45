use std::path::{Path, PathBuf};

/// Progress reporting for a run.
/// The organizer emits one message per action; the CLI prints `format()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressMessage {
    /// A bucket folder was created
    BucketCreated { path: PathBuf },
    /// Track moved into its genre bucket
    TrackRelocated {
        file_name: String,
        from_dir: PathBuf,
        to_dir: PathBuf,
    },
    /// Track name already taken in its bucket, moved to `Duplicate`
    TrackDuplicated {
        file_name: String,
        duplicate_dir: PathBuf,
    },
    /// Track could not be organized (only emitted when the run keeps going)
    TrackFailed {
        path: Option<PathBuf>,
        reason: String,
    },
    /// Final completion message
    RunComplete {
        relocated: usize,
        duplicated: usize,
        failed: usize,
    },
}

impl ProgressMessage {
    /// Format the message for console display
    pub fn format(&self) -> String {
        match self {
            ProgressMessage::BucketCreated { path } => {
                format!("Created folder {}", path.display())
            }
            ProgressMessage::TrackRelocated {
                file_name,
                from_dir,
                to_dir,
            } => format!(
                "Moved {} from {} to {}",
                file_name,
                from_dir.display(),
                to_dir.display()
            ),
            ProgressMessage::TrackDuplicated {
                file_name,
                duplicate_dir,
            } => format!(
                "Song {} already exists in the destination folder. Moved to {}",
                file_name,
                duplicate_dir.display()
            ),
            ProgressMessage::TrackFailed { path, reason } => match path {
                Some(path) => format!("Failed to organize {}: {}", path.display(), reason),
                None => format!("Failed to organize a track: {}", reason),
            },
            ProgressMessage::RunComplete {
                relocated,
                duplicated,
                failed,
            } => {
                if relocated + duplicated + failed == 0 {
                    "Nothing to organize".to_string()
                } else {
                    format!(
                        "Organized {} songs ({} moved to genre folders, {} duplicates, {} failed)",
                        relocated + duplicated,
                        relocated,
                        duplicated,
                        failed
                    )
                }
            }
        }
    }

    /// Whether this message reports a problem
    pub fn is_failure(&self) -> bool {
        matches!(self, ProgressMessage::TrackFailed { .. })
    }
}

/// Directory part of a path, for the "from"/"to" parts of progress lines
pub fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
