use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::env;
use tracing_subscriber::EnvFilter;

use update_tasklist::{resolve_tasklist_path, update_tasklist, UpdateConfig, TASKLIST_FILE_ENV};

fn main() -> Result<()> {
    let matches = Command::new("update_tasklist")
        .version("0.1.0")
        .about("Marks completed Phase 0 tasks as checked in the tasklist")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .num_args(1)
                .help("Tasklist to update (default: TASKLIST-WITH-CHECKBOXES.md)"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Report what would be marked without writing the file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    let env_path = env::var(TASKLIST_FILE_ENV).ok();
    let path = resolve_tasklist_path(
        matches.get_one::<String>("file").map(String::as_str),
        env_path.as_deref(),
    );
    let config = UpdateConfig {
        path,
        dry_run: matches.get_flag("dry_run"),
    };
    tracing::debug!(?config, "resolved configuration");

    let report = update_tasklist(&config)?;

    if report.written {
        println!("✅ Updated {} with completed tasks", report.path.display());
    } else {
        println!(
            "Dry run: {} task(s) would be marked complete in {}",
            report.marked,
            report.path.display()
        );
    }
    tracing::info!(
        checked = report.tally.checked,
        unchecked = report.tally.unchecked,
        total = report.tally.total(),
        "tasklist status"
    );
    Ok(())
}

// Logs go to stderr; stdout carries only the confirmation line.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
