use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::Accessor;
use std::fs::File;
use std::io::BufReader;

/// Tag fields the organizer cares about.
/// `genre` is empty when the file carries no genre.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub genre: String,
    pub title: Option<String>,
    pub artist: Option<String>,
}

/// Reads embedded metadata from an open audio file.
pub trait TagReader {
    fn read_metadata(&self, file: File) -> lofty::error::Result<TrackMetadata>;
}

/// [`TagReader`] backed by lofty. The container type is detected from the
/// file content, not its extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_metadata(&self, file: File) -> lofty::error::Result<TrackMetadata> {
        let tagged_file = Probe::new(BufReader::new(file))
            .guess_file_type()?
            .read()?;

        // Prefer the format's native tag, fall back to whatever else is there
        let Some(tag) = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
        else {
            return Ok(TrackMetadata::default());
        };

        Ok(TrackMetadata {
            genre: tag
                .genre()
                .map(|g| g.trim().to_string())
                .unwrap_or_default(),
            title: tag.title().map(|t| t.to_string()),
            artist: tag.artist().map(|a| a.to_string()),
        })
    }
}
