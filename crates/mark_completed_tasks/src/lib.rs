// crates/mark_completed_tasks/src/lib.rs

use anyhow::{Context, Result};
use checkbox_marker::{CHECKED_PREFIX, UNCHECKED_PREFIX};
use regex::{Captures, Regex};

/// Flips `- [ ] <description>` to `- [x] <description>` for one literal
/// description.
///
/// The description is escaped before compilation, so `.`, `[`, `]` and friends
/// in file names match literally. A line matches only when the description
/// runs to the end of it; leading indentation, trailing blanks and a `\r` are
/// carried over untouched.
#[derive(Debug, Clone)]
pub struct Rule {
    description: String,
    pattern: Regex,
}

impl Rule {
    pub fn new(description: &str) -> Result<Self> {
        let source = format!(
            r"(?m)^(?P<indent>[ \t]*){}(?P<desc>{})(?P<trail>[ \t]*\r?)$",
            regex::escape(UNCHECKED_PREFIX),
            regex::escape(description)
        );
        let pattern = Regex::new(&source)
            .with_context(|| format!("Invalid pattern for task '{}'", description))?;
        Ok(Self {
            description: description.to_string(),
            pattern,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Applies the rule to `content`, returning the new text and how many
    /// lines were flipped.
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut hits = 0;
        let replaced = self.pattern.replace_all(content, |caps: &Captures| {
            hits += 1;
            format!(
                "{}{}{}{}",
                &caps["indent"],
                CHECKED_PREFIX,
                &caps["desc"],
                &caps["trail"]
            )
        });
        (replaced.into_owned(), hits)
    }
}

/// Compiles one rule per description, preserving order.
pub fn compile_rules<'a, I>(descriptions: I) -> Result<Vec<Rule>>
where
    I: IntoIterator<Item = &'a str>,
{
    descriptions.into_iter().map(Rule::new).collect()
}

/// Rules for every task listed in `completed_tasks`.
pub fn default_rules() -> Result<Vec<Rule>> {
    compile_rules(completed_tasks::all_descriptions())
}

/// Result of a marking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkOutcome {
    /// Transformed document.
    pub content: String,
    /// Number of lines that went from unchecked to checked.
    pub marked: usize,
    /// Per-rule hit counts, in rule order.
    pub hits: Vec<(String, usize)>,
}

impl MarkOutcome {
    /// Descriptions that matched no unchecked line.
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.hits
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(description, _)| description.as_str())
    }
}

/// Runs every rule over `content` in order.
pub fn mark_completed(content: &str, rules: &[Rule]) -> MarkOutcome {
    let mut current = content.to_string();
    let mut marked = 0;
    let mut hits = Vec::with_capacity(rules.len());

    for rule in rules {
        let (next, count) = rule.apply(&current);
        if count > 0 {
            tracing::debug!(task = rule.description(), count, "marked complete");
            current = next;
        }
        marked += count;
        hits.push((rule.description().to_string(), count));
    }

    MarkOutcome {
        content: current,
        marked,
        hits,
    }
}
