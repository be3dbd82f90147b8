mod discover;
mod report;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use overlap_check::{OverlapSearcher, ReadPolicy, Sensitivity};
use report::Report;

#[derive(Parser, Debug)]
#[clap(
    name = "overlap-check",
    about = "A program to find plain-text documents sharing word n-grams."
)]
struct Args {
    /// Directory of .txt files to be checked.
    #[clap(default_value = ".")]
    directory: PathBuf,

    /// Number of consecutive words per n-gram (must be more than 0).
    /// The larger this value, the longer a verbatim overlap must be to be reported.
    #[clap(default_value = "15")]
    sensitivity: Sensitivity,

    /// Disables parallel extraction and comparison.
    #[clap(short = 'p', long)]
    disable_parallel: bool,

    /// Stops at the first unreadable file instead of skipping it.
    #[clap(short = 'a', long)]
    abort_on_error: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("overlap_check=warn")),
        )
        .init();

    let args = Args::parse();
    let start = Instant::now();

    let documents = discover::text_files(&args.directory)?;
    let read_policy = if args.abort_on_error {
        ReadPolicy::Abort
    } else {
        ReadPolicy::Skip
    };
    let searcher = OverlapSearcher::with_sensitivity(args.sensitivity)
        .read_policy(read_policy)
        .shows_progress(true);

    let mut report = Report::new(io::stdout().lock());
    report.start(documents.len(), searcher.sensitivity())?;

    let num_flagged = if documents.is_empty() {
        report.no_files()?;
        0
    } else {
        let profiles = if args.disable_parallel {
            searcher.build_profiles(&documents)?
        } else {
            searcher.build_profiles_in_parallel(&documents)?
        };
        report.skipped(profiles.failures())?;

        let comparison = if args.disable_parallel {
            profiles.compare_all()
        } else {
            profiles.compare_all_in_parallel()
        };
        report.comparison(&comparison)?;
        comparison.num_flagged()
    };

    report.finish(num_flagged, start.elapsed())?;
    Ok(())
}
