use crate::help::{CommandDoc, HelpTables, ResourceLink, TroubleshootingEntry, UsageExample};

pub const FALLBACK_DESCRIPTION: &str = "No description available";

pub const FIX_COMMANDS: &[CommandDoc] = &[
    CommandDoc {
        name: "fix:all",
        description: "Run every automated fix in sequence",
    },
    CommandDoc {
        name: "fix:deps",
        description: "Deduplicate and reinstall dependencies to match the lockfile",
    },
    CommandDoc {
        name: "fix:docs",
        description: "Regenerate reference docs and repair broken internal links",
    },
    CommandDoc {
        name: "fix:format",
        description: "Apply the project formatter to all tracked sources",
    },
    CommandDoc {
        name: "fix:imports",
        description: "Sort imports and remove unused ones",
    },
    CommandDoc {
        name: "fix:lint",
        description: "Run the linter with autofix enabled",
    },
    CommandDoc {
        name: "fix:lockfile",
        description: "Rebuild the lockfile after a merge conflict",
    },
    CommandDoc {
        name: "fix:permissions",
        description: "Restore executable bits on scripts and hooks",
    },
    CommandDoc {
        name: "fix:types",
        description: "Apply automatic fixes for type-checker diagnostics",
    },
    CommandDoc {
        name: "fix:whitespace",
        description: "Strip trailing whitespace and normalize line endings",
    },
];

pub const USAGE_EXAMPLES: &[UsageExample] = &[
    UsageExample {
        command: "fix:all",
        description: "Clean up the whole repository before opening a pull request",
        when_to_use: "CI reports several unrelated style or lint failures at once",
    },
    UsageExample {
        command: "fix:format",
        description: "Reformat sources after a large refactor",
        when_to_use: "The formatting check fails or a diff is full of whitespace noise",
    },
    UsageExample {
        command: "fix:lint",
        description: "Resolve autofixable lint violations",
        when_to_use: "The linter reports violations marked as fixable",
    },
    UsageExample {
        command: "fix:lockfile",
        description: "Recover from a conflicted lockfile",
        when_to_use: "A rebase or merge left conflict markers in the lockfile",
    },
];

pub const TROUBLESHOOTING: &[TroubleshootingEntry] = &[
    TroubleshootingEntry {
        issue: "A fix command is not found",
        solution: "Install dependencies first, then confirm the script is declared in the manifest's scripts section.",
    },
    TroubleshootingEntry {
        issue: "The fix ran but CI still fails",
        solution: "Some violations cannot be fixed automatically. Run the matching check locally and address the remaining findings by hand.",
    },
    TroubleshootingEntry {
        issue: "Formatting and linting keep undoing each other",
        solution: "Run fix:format before fix:lint, or use fix:all which applies them in a stable order.",
    },
    TroubleshootingEntry {
        issue: "Dependency fixes change the lockfile unexpectedly",
        solution: "Check that your package manager version matches the one pinned by the project before re-running fix:deps.",
    },
];

pub const RESOURCES: &[ResourceLink] = &[
    ResourceLink {
        label: "Contributing guide",
        target: "CONTRIBUTING.md",
    },
    ResourceLink {
        label: "Code style",
        target: "docs/code-style.md",
    },
    ResourceLink {
        label: "CI checks",
        target: "docs/ci.md",
    },
];

pub fn default_tables() -> HelpTables {
    HelpTables {
        descriptions: FIX_COMMANDS,
        usage_examples: USAGE_EXAMPLES,
        troubleshooting: TROUBLESHOOTING,
        resources: RESOURCES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn description_table_has_unique_prefixed_names() {
        let names: BTreeSet<&str> = FIX_COMMANDS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), FIX_COMMANDS.len());
        assert!(FIX_COMMANDS.iter().all(|c| c.name.starts_with("fix:")));
    }

    #[test]
    fn usage_examples_reference_documented_commands() {
        let tables = default_tables();
        for ex in USAGE_EXAMPLES {
            assert!(
                tables.description_for(ex.command).is_some(),
                "undocumented example command {}",
                ex.command
            );
        }
    }
}
