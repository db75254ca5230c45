//! # Genresort Core Library
//!
//! Sorts a music library into genre folders. The walker finds mp3/flac files,
//! the tag reader extracts their genre, the placement resolver picks the bucket
//! under `<root>/Genres`, and the organizer drives all of it one file at a time.

pub mod audio;
pub mod config;
pub mod directory;
pub mod error;
pub mod metadata;
pub mod organizer;
pub mod placement;
pub mod progress;
pub mod report;
pub mod utils;
pub mod walker;

pub use config::{FailurePolicy, GenrePolicy, LibraryLayout, OrganizeConfig};
pub use error::OrganizeError;
pub use metadata::{LoftyTagReader, TagReader, TrackMetadata};
pub use organizer::Organizer;
pub use report::{RunReport, TrackOutcome};
