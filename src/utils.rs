use anyhow::{Context, Result};
use genresort::OrganizeError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

const DEFAULT_MUSIC_DIR: &str = "~/Music";

/// `$XDG_MUSIC_DIR` when set, otherwise `~/Music`
pub fn get_default_music_dir() -> Result<PathBuf> {
    let music_dir =
        std::env::var("XDG_MUSIC_DIR").unwrap_or_else(|_| DEFAULT_MUSIC_DIR.to_string());
    expand_music_dir(&music_dir)
}

/// Expand a leading `~` to the home directory
pub fn expand_music_dir(music_dir: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(music_dir).into_owned();

    // shellexpand leaves the tilde alone when there is no home directory
    if expanded.starts_with('~') && music_dir.starts_with('~') {
        return Err(OrganizeError::HomeDirectory(music_dir.to_string()).into());
    }

    Ok(PathBuf::from(expanded))
}

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global tracing subscriber.
/// The returned guard flushes the log file on drop, so keep it alive in `main`.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_target(false);

    match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file '{}' has no file name", path.display()))?;
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory '{}'", dir.display()))?;

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder.with_ansi(false).with_writer(writer).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_music_dir_plain_path() -> Result<()> {
        assert_eq!(
            expand_music_dir("/srv/music")?,
            PathBuf::from("/srv/music")
        );
        assert_eq!(expand_music_dir("relative")?, PathBuf::from("relative"));

        Ok(())
    }

    #[test]
    fn test_expand_music_dir_tilde() -> Result<()> {
        let expanded = expand_music_dir("~/Music")?;

        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("Music"));

        Ok(())
    }

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(5), Level::DEBUG);
    }
}
