// crates/completed_tasks/src/lib.rs

//! Phase 0 tasks that are done and should be ticked off in the tasklist.
//!
//! Descriptions are literal: they must match the tasklist wording exactly.

/// One numbered task of the plan and the checklist items it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub descriptions: &'static [&'static str],
}

/// Completed tasks, 0.1 through 0.7.
pub const COMPLETED_TASKS: &[TaskGroup] = &[
    TaskGroup {
        id: "0.1",
        title: "Repository setup",
        descriptions: &[
            "Create coditect-citus-django-infra repository",
            "Setup .gitignore for Python",
            "Setup .gitignore for Terraform",
            "Setup .gitignore for Kubernetes",
        ],
    },
    TaskGroup {
        id: "0.2",
        title: "Directory structure",
        descriptions: &[
            "Create terraform/ directory structure",
            "Create kubernetes/ directory",
            "Create django/ directory",
            "Create docs/ directory",
            "Create scripts/ directory",
            "Create tests/ directory",
        ],
    },
    TaskGroup {
        id: "0.3",
        title: "Symlinks",
        descriptions: &[
            "Create .coditect symlink",
            "Create .claude symlink",
            "Verify symlinks work",
            "Test access to CODITECT",
        ],
    },
    TaskGroup {
        id: "0.4",
        title: "Project documents",
        descriptions: &[
            "Create README.md",
            "Create CONTRIBUTING.md",
            "Create LICENSE",
            "Create CLAUDE.md",
            "Create CODE_OF_CONDUCT.md",
        ],
    },
    TaskGroup {
        id: "0.5",
        title: "Python packaging",
        descriptions: &[
            "Create pyproject.toml",
            "Create requirements.txt",
            "Create requirements-dev.txt",
        ],
    },
    TaskGroup {
        id: "0.6",
        title: "Linting and formatting",
        descriptions: &[
            "Create .ruff.toml",
            "Create pyproject.toml [tool.black]",
            "Create .pre-commit-config.yaml",
        ],
    },
    TaskGroup {
        id: "0.7",
        title: "Contribution workflow",
        descriptions: &[
            "Create .github/pull_request_template.md",
            "Create .github/ISSUE_TEMPLATE/",
            "Document commit message conventions",
            "Create commit message template",
        ],
    },
];

/// Every completed description in table order.
pub fn all_descriptions() -> impl Iterator<Item = &'static str> {
    COMPLETED_TASKS
        .iter()
        .flat_map(|group| group.descriptions.iter().copied())
}

/// Returns the group a description belongs to, if any.
pub fn group_of(description: &str) -> Option<&'static TaskGroup> {
    COMPLETED_TASKS
        .iter()
        .find(|group| group.descriptions.contains(&description))
}
