// crates/checkbox_marker/src/lib.rs

//! Markdown checklist line grammar shared by the tasklist tool‑chain.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of an unchecked item **with** the separating space
/// (the form the matchers look for).
pub const UNCHECKED_PREFIX: &str = "- [ ] ";

/// Prefix of a checked item **with** the separating space (the form the
/// updater writes).
pub const CHECKED_PREFIX: &str = "- [x] ";

// `- [ ] text`, `- [x] text` or `- [X] text`, optionally indented.
static CHECKLIST_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*- \[(?P<mark>[ xX])\] (?P<desc>.*?)[ \t]*\r?$").unwrap()
});

/// A single checklist line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistLine<'a> {
    pub checked: bool,
    pub description: &'a str,
}

/// Parses `line` as a checklist item. Returns `None` for any other content.
pub fn parse_checklist_line(line: &str) -> Option<ChecklistLine<'_>> {
    let caps = CHECKLIST_LINE_RE.captures(line)?;
    let checked = caps.name("mark").map_or(false, |m| m.as_str() != " ");
    let description = caps.name("desc").map_or("", |m| m.as_str());
    Some(ChecklistLine {
        checked,
        description,
    })
}

/// Count of checklist items in a document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistTally {
    pub checked: usize,
    pub unchecked: usize,
}

impl ChecklistTally {
    pub fn total(&self) -> usize {
        self.checked + self.unchecked
    }
}

/// Counts checked and unchecked items across every line of `content`.
pub fn tally(content: &str) -> ChecklistTally {
    content
        .lines()
        .filter_map(parse_checklist_line)
        .fold(ChecklistTally::default(), |mut acc, item| {
            if item.checked {
                acc.checked += 1;
            } else {
                acc.unchecked += 1;
            }
            acc
        })
}
