use anyhow::{Context, Result};
use genresort::{FailurePolicy, GenrePolicy, LoftyTagReader, OrganizeConfig, Organizer, RunReport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::console;

/// Organize the music library at `library_root` into genre folders
pub fn run(
    library_root: PathBuf,
    failure_policy: FailurePolicy,
    genre_policy: GenrePolicy,
    report_path: Option<&Path>,
) -> Result<()> {
    if !library_root.is_dir() {
        anyhow::bail!(
            "Music directory '{}' does not exist or is not a directory",
            library_root.display()
        );
    }

    let config = OrganizeConfig::new(library_root)
        .with_failure_policy(failure_policy)
        .with_genre_policy(genre_policy);
    let organizer = Organizer::new(config, LoftyTagReader);

    // The report is written even when the run aborts, so moves already made are on record
    let mut report = RunReport::default();
    let outcome = organizer.run_into(&mut report, console::print_progress);

    if let Some(path) = report_path {
        write_report(&report, path)?;
        info!("📄 Wrote run report to {}", path.display());
    }

    outcome.with_context(|| {
        format!(
            "Failed to organize '{}'",
            organizer.config().library_root.display()
        )
    })?;

    if report.failed() > 0 {
        anyhow::bail!("{} track(s) could not be organized", report.failed());
    }

    Ok(())
}

fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write run report '{}'", path.display()))
}
