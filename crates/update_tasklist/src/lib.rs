// crates/update_tasklist/src/lib.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use checkbox_marker::ChecklistTally;
use completed_tasks::TaskGroup;
use mark_completed_tasks::{default_rules, mark_completed, MarkOutcome};

mod config;
mod io;

pub use config::{resolve_tasklist_path, UpdateConfig, DEFAULT_TASKLIST_FILE, TASKLIST_FILE_ENV};
pub use io::atomic_write;

/// What a run did to the tasklist.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub path: PathBuf,
    /// Lines flipped from `- [ ]` to `- [x]`.
    pub marked: usize,
    /// Checklist counts after the update.
    pub tally: ChecklistTally,
    /// False for dry runs.
    pub written: bool,
}

/// Reads the tasklist, ticks every completed task, and writes it back.
///
/// The file is read once and written once. Nothing is written when the read
/// fails or in dry-run mode.
pub fn update_tasklist(config: &UpdateConfig) -> Result<UpdateReport> {
    let path = &config.path;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading tasklist {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read tasklist");

    let rules = default_rules()?;
    let outcome = mark_completed(&content, &rules);
    log_outcome(&outcome);

    let written = if config.dry_run {
        tracing::info!(path = %path.display(), "dry run, tasklist left untouched");
        false
    } else {
        atomic_write(path, outcome.content.as_bytes())
            .with_context(|| format!("Error writing tasklist {}", path.display()))?;
        true
    };

    Ok(UpdateReport {
        path: path.clone(),
        marked: outcome.marked,
        tally: checkbox_marker::tally(&outcome.content),
        written,
    })
}

fn log_outcome(outcome: &MarkOutcome) {
    let mut per_group: Vec<(&TaskGroup, usize)> = completed_tasks::COMPLETED_TASKS
        .iter()
        .map(|group| (group, 0))
        .collect();
    for (description, count) in &outcome.hits {
        let Some(group) = completed_tasks::group_of(description) else {
            continue;
        };
        if let Some(entry) = per_group.iter_mut().find(|(seen, _)| seen.id == group.id) {
            entry.1 += count;
        }
    }
    for (group, marked) in per_group {
        tracing::debug!(task = group.id, title = group.title, marked, "task group");
    }
    // Wording drift in the tasklist shows up here and nowhere else.
    for description in outcome.unmatched() {
        tracing::debug!(task = description, "no unchecked line found");
    }
    tracing::info!(marked = outcome.marked, "marking complete");
}
