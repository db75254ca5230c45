use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use genresort::{FailurePolicy, GenrePolicy};
use std::io;
use std::path::PathBuf;

mod commands;
mod console;
mod utils;

#[derive(Parser)]
#[command(author, version, about = "Sort a music library into genre folders", long_about = None)]
struct Cli {
    /// Music directory (prompted for when omitted)
    music_dir: Option<String>,
    /// Keep organizing after a track fails instead of stopping
    #[arg(long)]
    keep_going: bool,
    /// What to do with genres that are not valid folder names
    #[arg(long, value_enum, default_value_t = GenrePolicyArg::Sanitize)]
    genre_policy: GenrePolicyArg,
    /// Write a JSON report of every move to this file, also when the run stops early
    #[arg(long)]
    report: Option<PathBuf>,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum GenrePolicyArg {
    /// Replace separators and reserved characters with '_'
    Sanitize,
    /// Fail the track
    Reject,
}

impl From<GenrePolicyArg> for GenrePolicy {
    fn from(arg: GenrePolicyArg) -> Self {
        match arg {
            GenrePolicyArg::Sanitize => GenrePolicy::Sanitize,
            GenrePolicyArg::Reject => GenrePolicy::Reject,
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from a .env file if present
    dotenv().ok();
    let cli = Cli::parse();
    let _log_guard = utils::init_logging(cli.verbose, cli.log_file.as_deref())?;

    console::print_notice_and_usage()?;

    let library_root = match cli.music_dir {
        Some(music_dir) => utils::expand_music_dir(&music_dir)?,
        None => {
            let default_dir = utils::get_default_music_dir()?;
            console::prompt_library_root(io::stdin().lock(), io::stdout(), &default_dir)?
        }
    };

    let failure_policy = if cli.keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };

    commands::organize::run(
        library_root,
        failure_policy,
        cli.genre_policy.into(),
        cli.report.as_deref(),
    )
}
