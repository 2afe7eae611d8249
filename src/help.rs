use serde::Serialize;

/// One row of the description table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDoc {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageExample {
    pub command: &'static str,
    pub description: &'static str,
    pub when_to_use: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TroubleshootingEntry {
    pub issue: &'static str,
    pub solution: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub label: &'static str,
    pub target: &'static str,
}

/// The hand-authored tables the document is assembled from.
///
/// Lists are rendered in the order they are declared; only the description
/// table is used as a lookup.
#[derive(Debug, Clone, Copy)]
pub struct HelpTables {
    pub descriptions: &'static [CommandDoc],
    pub usage_examples: &'static [UsageExample],
    pub troubleshooting: &'static [TroubleshootingEntry],
    pub resources: &'static [ResourceLink],
}

impl HelpTables {
    pub fn description_for(&self, name: &str) -> Option<&'static str> {
        self.descriptions
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Command-name prefix selecting which manifest entries are listed.
    pub prefix: String,
    /// Shell invocation placed in front of command names in code blocks.
    pub runner: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prefix: crate::config::DEFAULT_PREFIX.to_string(),
            runner: crate::config::DEFAULT_RUNNER.to_string(),
        }
    }
}

/// A selected command joined with its description, as emitted by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedCommand {
    pub name: String,
    pub description: String,
    pub documented: bool,
}
