use crate::help::{HelpTables, ListedCommand, RenderOptions};
use crate::help_data::FALLBACK_DESCRIPTION;
use crate::manifest::Manifest;

const TITLE: &str = "Repository Fix Commands";
const FOOTER: &str = "_Generated by fixhelp from the project manifest. Do not edit by hand._";

pub fn describe(tables: &HelpTables, name: &str) -> &'static str {
    tables.description_for(name).unwrap_or(FALLBACK_DESCRIPTION)
}

/// Selected manifest commands in listing order, joined with their descriptions.
pub fn list_commands(
    manifest: &Manifest,
    tables: &HelpTables,
    opts: &RenderOptions,
) -> Vec<ListedCommand> {
    let selected = manifest.commands_with_prefix(&opts.prefix);
    tracing::debug!(
        prefix = %opts.prefix,
        total = manifest.len(),
        selected = selected.len(),
        "selected commands"
    );
    let listed: Vec<ListedCommand> = selected
        .into_iter()
        .map(|name| {
            let documented = tables.description_for(name).is_some();
            if !documented {
                tracing::debug!(command = name, "no description for command, using fallback");
            }
            ListedCommand {
                name: name.to_string(),
                description: describe(tables, name).to_string(),
                documented,
            }
        })
        .collect();
    let undocumented = listed.iter().filter(|c| !c.documented).count();
    if undocumented > 0 {
        tracing::warn!(undocumented, "commands without a description use the fallback text");
    }
    listed
}

pub fn render_command_list(
    manifest: &Manifest,
    tables: &HelpTables,
    opts: &RenderOptions,
) -> String {
    let mut out = String::new();
    out.push_str("## Available Commands\n\n");
    let commands = list_commands(manifest, tables, opts);
    if commands.is_empty() {
        out.push_str(&format!(
            "_No commands starting with `{}` were found in the manifest._\n",
            opts.prefix
        ));
        return out;
    }
    for c in &commands {
        out.push_str(&format!("- `{}`: {}\n", c.name, c.description));
    }
    out
}

pub fn render_usage_examples(tables: &HelpTables, opts: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str("## Usage Examples\n");
    for ex in tables.usage_examples {
        out.push_str(&format!("\n### {}\n\n", ex.description));
        out.push_str("```bash\n");
        out.push_str(&format!("{} {}\n", opts.runner, ex.command));
        out.push_str("```\n\n");
        out.push_str(&format!("When to use: {}\n", ex.when_to_use));
    }
    out
}

pub fn render_troubleshooting(tables: &HelpTables) -> String {
    let mut out = String::new();
    out.push_str("## Troubleshooting\n");
    for t in tables.troubleshooting {
        out.push_str(&format!("\n### {}\n\n{}\n", t.issue, t.solution));
    }
    out
}

pub fn render_resources(tables: &HelpTables) -> String {
    let mut out = String::new();
    out.push_str("## Related Resources\n\n");
    for r in tables.resources {
        out.push_str(&format!("- [{}]({})\n", r.label, r.target));
    }
    out
}

pub fn render_help(manifest: &Manifest, tables: &HelpTables, opts: &RenderOptions) -> String {
    let sections = [
        format!("# {TITLE}\n"),
        format!(
            "Automated fixes available in this repository. Run any of them with `{} <command>`.\n",
            opts.runner
        ),
        render_command_list(manifest, tables, opts),
        render_usage_examples(tables, opts),
        render_troubleshooting(tables),
        render_resources(tables),
        format!("---\n\n{FOOTER}\n"),
    ];
    sections.join("\n")
}
