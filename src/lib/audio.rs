use std::path::Path;

/// Audio formats the organizer will pick up.
/// Anything else under the library root is left where it is.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "flac"];

/// Leading character of hidden files (`.DS_Store`, `._song.mp3`, ...)
pub const HIDDEN_MARKER: char = '.';

/// Check if a file path has a supported audio extension (case-insensitive)
pub fn is_supported_audio_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Check if the file name starts with the hidden marker
pub fn is_hidden<P: AsRef<Path>>(path: P) -> bool {
    // Byte check so non-UTF-8 names are still recognized
    path.as_ref()
        .file_name()
        .is_some_and(|name| name.as_encoded_bytes().first() == Some(&(HIDDEN_MARKER as u8)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_audio_file() {
        assert!(is_supported_audio_file("song.mp3"));
        assert!(is_supported_audio_file("song.flac"));
        assert!(is_supported_audio_file("song.MP3")); // Case insensitive
        assert!(is_supported_audio_file("dir/song.Flac"));
        assert!(!is_supported_audio_file("song.wav"));
        assert!(!is_supported_audio_file("song.m4a"));
        assert!(!is_supported_audio_file("cover.jpg"));
        assert!(!is_supported_audio_file("mp3"));
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".hidden.mp3"));
        assert!(is_hidden("some/dir/.DS_Store"));
        assert!(!is_hidden("visible.mp3"));
        assert!(!is_hidden(".config/visible.mp3"));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_hidden_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = Path::new(OsStr::from_bytes(b".\xff\xfe.mp3"));

        assert!(is_hidden(name));
        assert!(is_supported_audio_file(name));
        assert!(!is_hidden(Path::new(OsStr::from_bytes(b"\xff.mp3"))));
    }
}
