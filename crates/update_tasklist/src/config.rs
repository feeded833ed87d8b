// crates/update_tasklist/src/config.rs

use std::path::PathBuf;

/// Checklist updated when neither a path argument nor `TASKLIST_FILE` is given.
pub const DEFAULT_TASKLIST_FILE: &str = "TASKLIST-WITH-CHECKBOXES.md";

/// Environment override for the checklist path.
pub const TASKLIST_FILE_ENV: &str = "TASKLIST_FILE";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct UpdateConfig {
    pub path: PathBuf,
    pub dry_run: bool,
}

impl UpdateConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dry_run: false,
        }
    }
}

/// Picks the checklist path: CLI argument first, then the environment
/// override, then [`DEFAULT_TASKLIST_FILE`]. Empty values are ignored.
pub fn resolve_tasklist_path(cli: Option<&str>, env: Option<&str>) -> PathBuf {
    cli.into_iter()
        .chain(env)
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_TASKLIST_FILE)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        assert_eq!(resolve_tasklist_path(None, None), PathBuf::from(DEFAULT_TASKLIST_FILE));
    }

    #[test]
    fn test_cli_wins_over_env() {
        assert_eq!(
            resolve_tasklist_path(Some("cli.md"), Some("env.md")),
            PathBuf::from("cli.md")
        );
    }

    #[test]
    fn test_env_used_without_cli() {
        assert_eq!(resolve_tasklist_path(None, Some("env.md")), PathBuf::from("env.md"));
    }

    #[test]
    fn test_blank_values_ignored() {
        assert_eq!(
            resolve_tasklist_path(Some("  "), Some("")),
            PathBuf::from(DEFAULT_TASKLIST_FILE)
        );
    }
}
