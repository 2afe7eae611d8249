//! Markdown help generator for a project's `fix:` commands.
//!
//! The manifest is a `package.json`-style descriptor; its `scripts` keys are
//! filtered by prefix, sorted, and joined with hand-authored description,
//! usage-example and troubleshooting tables.

pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod help_data;
pub mod help_render;
pub mod logging;
pub mod manifest;

use std::path::Path;

pub use error::{HelpError, HelpResult};
pub use help::{HelpTables, ListedCommand, RenderOptions};
pub use help_render::render_help;
pub use manifest::Manifest;

/// Load the manifest at `path` and render the help document with the
/// built-in tables and default options.
pub fn generate_help(path: &Path) -> HelpResult<String> {
    generate_help_with(path, &RenderOptions::default())
}

pub fn generate_help_with(path: &Path, opts: &RenderOptions) -> HelpResult<String> {
    let manifest = Manifest::load(path)?;
    Ok(render_help(&manifest, &help_data::default_tables(), opts))
}
