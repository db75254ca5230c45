use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::{FailurePolicy, OrganizeConfig};
use crate::directory;
use crate::error::{OrganizeError, Result};
use crate::metadata::TagReader;
use crate::placement::{Placement, PlacementKind, PlacementResolver};
use crate::progress::{self, ProgressMessage};
use crate::report::{RunReport, TrackOutcome};
use crate::walker;

/// An audio file found by the walker, with the genre read from its tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub file_name: OsString,
    pub genre: String,
}

/// Sorts a music library into `<root>/Genres/<genre>` folders.
///
/// Tracks are handled one at a time in traversal order: open, read tags,
/// resolve the destination, rename. Each track is finished before the next
/// one is read. The organizer takes no locks, so it must not run
/// concurrently with anything else writing to the same library root.
pub struct Organizer<R> {
    config: OrganizeConfig,
    resolver: PlacementResolver,
    reader: R,
}

impl<R: TagReader> Organizer<R> {
    pub fn new(config: OrganizeConfig, reader: R) -> Self {
        let resolver = PlacementResolver::new(config.layout(), config.genre_policy);
        Self {
            config,
            resolver,
            reader,
        }
    }

    pub fn config(&self) -> &OrganizeConfig {
        &self.config
    }

    /// Organize the whole library, reporting each action to `on_progress`.
    ///
    /// With [`FailurePolicy::Abort`] the first error ends the run and is
    /// returned; files already moved stay where they are. With
    /// [`FailurePolicy::Continue`] failures are recorded in the report and
    /// the walk goes on.
    pub fn run<F>(&self, on_progress: F) -> Result<RunReport>
    where
        F: FnMut(&ProgressMessage),
    {
        let mut report = RunReport::default();
        self.run_into(&mut report, on_progress)?;
        Ok(report)
    }

    /// Like [`Organizer::run`], but records into a caller-owned report so the
    /// moves made before an abort are still available afterwards.
    pub fn run_into<F>(&self, report: &mut RunReport, mut on_progress: F) -> Result<()>
    where
        F: FnMut(&ProgressMessage),
    {
        let root = &self.config.library_root;
        info!("🔍 Scanning music directory: {}", root.display());

        for candidate in walker::candidate_tracks(root) {
            let result = candidate
                .and_then(|path| self.place_track(path))
                .and_then(|placement| {
                    // Folders exist from here on, whether or not the move succeeds
                    for dir in &placement.created_dirs {
                        on_progress(&ProgressMessage::BucketCreated { path: dir.clone() });
                    }
                    report.created_dirs.extend(placement.created_dirs.iter().cloned());

                    self.move_track(&placement)?;
                    Ok(placement)
                });

            match result {
                Ok(placement) => {
                    on_progress(&progress_for(&placement));
                    report.record(TrackOutcome::from(placement));
                }
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Continue => {
                        warn!("Skipping after error: {}", e);
                        on_progress(&ProgressMessage::TrackFailed {
                            path: e.path(),
                            reason: e.to_string(),
                        });
                        report.record(TrackOutcome::Failed {
                            path: e.path(),
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        on_progress(&ProgressMessage::RunComplete {
            relocated: report.relocated(),
            duplicated: report.duplicated(),
            failed: report.failed(),
        });
        info!(
            "🎉 Finished: {} relocated, {} duplicates, {} failed",
            report.relocated(),
            report.duplicated(),
            report.failed()
        );

        Ok(())
    }

    /// Classify a single file and decide where it goes. Creates bucket folders
    /// but leaves the file in place.
    pub fn place_track(&self, path: PathBuf) -> Result<Placement> {
        let track = self.classify(path)?;
        self.resolver
            .resolve(&track.path, &track.file_name, &track.genre)
    }

    /// Perform the rename decided by [`Organizer::place_track`]
    pub fn move_track(&self, placement: &Placement) -> Result<()> {
        directory::move_file(&placement.source, &placement.destination)?;
        info!(
            "✅ Moved: {} -> {}",
            placement.source.display(),
            placement.destination.display()
        );
        Ok(())
    }

    /// Read the genre of a discovered file
    pub fn classify(&self, path: PathBuf) -> Result<Track> {
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| OrganizeError::MissingFileName { path: path.clone() })?;

        let file = File::open(&path).map_err(|source| OrganizeError::Open {
            path: path.clone(),
            source,
        })?;

        let metadata = self
            .reader
            .read_metadata(file)
            .map_err(|source| OrganizeError::TagRead {
                path: path.clone(),
                source,
            })?;

        debug!(
            "{}: genre={:?} artist={:?} title={:?}",
            path.display(),
            metadata.genre,
            metadata.artist,
            metadata.title
        );

        Ok(Track {
            path,
            file_name,
            genre: metadata.genre,
        })
    }
}

fn progress_for(placement: &Placement) -> ProgressMessage {
    let file_name = placement
        .destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match placement.kind {
        PlacementKind::Relocated => ProgressMessage::TrackRelocated {
            file_name,
            from_dir: progress::parent_dir(&placement.source),
            to_dir: placement.destination_dir().to_path_buf(),
        },
        PlacementKind::Duplicated => ProgressMessage::TrackDuplicated {
            file_name,
            duplicate_dir: placement.destination_dir().to_path_buf(),
        },
    }
}
