use anyhow::{Context, Result};
use crossterm::style::Stylize;
use genresort::progress::ProgressMessage;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::utils;

pub fn print_notice_and_usage() -> Result<()> {
    write_notice_and_usage(&mut io::stdout().lock())
}

fn write_notice_and_usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n {}\n", "🎶Music Genre Organizer:".red())?;
    writeln!(out, "{}", "Notice and Usage Instructions:".magenta().bold())?;
    writeln!(
        out,
        "This program organizes a music library by grouping songs into genre-based folders."
    )?;
    writeln!(out, "Only MP3 and FLAC files are supported.")?;
    writeln!(
        out,
        "Songs with no genre information are moved to a separate 'No Genre' folder."
    )?;
    writeln!(
        out,
        "Duplicate songs found in the destination folders are moved to a 'Duplicate' folder."
    )?;
    writeln!(out)?;
    writeln!(out, "{}", "Usage Instructions:".magenta().bold())?;
    writeln!(
        out,
        "1. Provide the path to the music library (defaults to $HOME/Music) when prompted."
    )?;
    writeln!(
        out,
        "2. The library is scanned and every song is moved to <library>/Genres/<genre>."
    )?;
    writeln!(out, "3. Songs without a genre go to the 'No Genre' folder.")?;
    writeln!(
        out,
        "4. Songs whose name is already taken in their genre folder go to the 'Duplicate' folder."
    )?;
    writeln!(
        out,
        "5. A song whose name is already in the 'Duplicate' folder replaces the earlier duplicate."
    )?;
    writeln!(out, "{}\n", "*".repeat(80))?;
    Ok(())
}

/// Ask for the library root on `output` and read one line from `input`.
/// Empty input (or end of input) selects `default_dir`.
pub fn prompt_library_root<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    default_dir: &Path,
) -> Result<PathBuf> {
    writeln!(
        output,
        "{}",
        format!(
            "Enter the music library path (leave empty for default {}):",
            default_dir.display()
        )
        .red()
    )?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read the music library path")?;

    match line.trim() {
        "" => Ok(default_dir.to_path_buf()),
        music_dir => utils::expand_music_dir(music_dir),
    }
}

/// Print one progress line; failures go to stderr
pub fn print_progress(message: &ProgressMessage) {
    if message.is_failure() {
        eprintln!("{}", message.format().yellow());
    } else {
        println!("{}", message.format());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_uses_default_on_empty_line() -> Result<()> {
        let mut output = Vec::new();
        let root = prompt_library_root(Cursor::new("\n"), &mut output, Path::new("/home/me/Music"))?;

        assert_eq!(root, PathBuf::from("/home/me/Music"));
        assert!(String::from_utf8(output)?.contains("/home/me/Music"));

        Ok(())
    }

    #[test]
    fn test_prompt_uses_default_on_eof() -> Result<()> {
        let root = prompt_library_root(Cursor::new(""), Vec::new(), Path::new("/music"))?;

        assert_eq!(root, PathBuf::from("/music"));

        Ok(())
    }

    #[test]
    fn test_prompt_trims_entered_path() -> Result<()> {
        let root = prompt_library_root(
            Cursor::new("  /srv/library  \n"),
            Vec::new(),
            Path::new("/music"),
        )?;

        assert_eq!(root, PathBuf::from("/srv/library"));

        Ok(())
    }

    #[test]
    fn test_notice_mentions_buckets() -> Result<()> {
        let mut output = Vec::new();
        write_notice_and_usage(&mut output)?;
        let text = String::from_utf8(output)?;

        assert!(text.contains("'No Genre' folder"));
        assert!(text.contains("'Duplicate' folder"));
        assert!(text.contains("replaces the earlier duplicate"));

        Ok(())
    }
}
