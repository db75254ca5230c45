use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{OrganizeError, Result};

/// Directory and file operations behind the placement decisions.
/// Create a directory (and its parents) if missing.
/// Returns `true` when the directory was created by this call.
pub fn ensure_directory(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(false),
        Ok(_) => Err(OrganizeError::CreateDir {
            path: path.to_path_buf(),
            source: io::Error::other("a file with this name already exists"),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|source| OrganizeError::CreateDir {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Created directory: {}", path.display());
            Ok(true)
        }
        Err(source) => Err(OrganizeError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Whether `dir/name` exists. A dangling symlink counts as existing.
/// Errors other than "not found" are reported, not swallowed.
pub fn entry_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(OrganizeError::ExistenceCheck {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Move a file with a single rename. Both paths must be on the same filesystem.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| OrganizeError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    debug!("Renamed: {} -> {}", from.display(), to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_creates_once() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let bucket = temp_dir.path().join("Genres").join("Rock");

        assert!(ensure_directory(&bucket)?);
        assert!(bucket.is_dir());

        // Second call is a no-op
        assert!(!ensure_directory(&bucket)?);

        Ok(())
    }

    #[test]
    fn test_ensure_directory_fails_on_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let blocker = temp_dir.path().join("Rock");
        fs::write(&blocker, b"not a folder")?;

        let result = ensure_directory(&blocker);

        assert!(matches!(result, Err(OrganizeError::CreateDir { .. })));

        Ok(())
    }

    #[test]
    fn test_entry_exists() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("song.mp3");

        assert!(!entry_exists(&file)?);
        fs::write(&file, b"test")?;
        assert!(entry_exists(&file)?);

        Ok(())
    }

    #[test]
    fn test_move_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let source = temp_dir.path().join("song.mp3");
        let dest_dir = temp_dir.path().join("Rock");
        fs::create_dir(&dest_dir)?;
        fs::write(&source, b"test audio content")?;

        move_file(&source, &dest_dir.join("song.mp3"))?;

        assert!(!source.exists());
        assert_eq!(fs::read(dest_dir.join("song.mp3"))?, b"test audio content");

        Ok(())
    }

    #[test]
    fn test_move_file_missing_source() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let source = temp_dir.path().join("gone.mp3");

        let result = move_file(&source, &temp_dir.path().join("dest.mp3"));

        assert!(matches!(result, Err(OrganizeError::Move { .. })));

        Ok(())
    }
}
