// Status output for the CLI, styled with colored and indicatif.
// Everything here goes to stderr: stdout is reserved for command output
// (fetched catalog paths, robots.txt) so it can be redirected.

use colored::Colorize as _;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const PD_TICK: Duration = Duration::from_millis(100);

/// Install the stderr log subscriber.
///
/// `RUST_LOG` is honoured unless `verbose` forces debug output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn create_progress_bar(len: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(PD_TICK);
    pb
}

pub fn print_fetch_header() {
    eprintln!("{}", "Translations Fetch".dimmed());
}

pub fn print_pulling(language: &str, remote: &str) {
    if language == remote {
        eprintln!("{} {}", "Pulling".dimmed(), language.green());
    } else {
        eprintln!(
            "{} {} {}",
            "Pulling".dimmed(),
            language.green(),
            format!("(as {})", remote).dimmed()
        );
    }
}

pub fn print_pull_failed(language: &str, error: &str) {
    eprintln!(
        "{} {}: {}",
        "Pull failed for".yellow(),
        language.white().bold(),
        error
    );
}

pub fn print_missing_catalog_dir(language: &str, dir: &Path) {
    eprintln!(
        "{} {}",
        "Skipping".dimmed(),
        format!("{} (no catalogs in {})", language, dir.display()).yellow()
    );
}

pub fn print_normalize_failed(path: &Path, error: &str) {
    eprintln!(
        "{} {}: {}",
        "Could not strip locations from".yellow(),
        path.display().to_string().white().bold(),
        error
    );
}

pub fn print_fetch_summary(languages: usize, catalogs: usize, skipped: &[String]) {
    eprintln!(
        "{} {} catalog(s) across {} language(s)",
        "Done:".green(),
        catalogs,
        languages
    );
    if !skipped.is_empty() {
        eprintln!("{} {}", "Nothing pulled for:".yellow(), skipped.join(", "));
    }
}

pub fn print_robots_header(version: &str) {
    eprintln!(
        "{} {}",
        "Translation completeness for".dimmed(),
        version.cyan()
    );
}

pub fn print_robots_summary(excluded: usize, total: usize, threshold: u8) {
    if excluded == 0 {
        eprintln!("{}", "All translations are complete enough to publish!".green());
    } else {
        eprintln!(
            "{} {} of {} page set(s) below {}%",
            "Excluding".yellow(),
            excluded,
            total,
            threshold
        );
    }
}
