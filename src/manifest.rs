use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{HelpError, HelpResult};

/// On-disk project descriptor. Only the `scripts` mapping is read; every
/// other key is ignored.
#[derive(Debug, Default, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    scripts: BTreeMap<String, Value>,
}

/// Command table loaded from a project descriptor.
///
/// Values are kept opaque; the generator only consumes the names. The map is
/// ordered, so every listing it produces is in byte-wise lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    commands: BTreeMap<String, Value>,
}

impl Manifest {
    pub fn load(path: &Path) -> HelpResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| HelpError::unreadable(path, e))?;
        let manifest = Self::from_json_str(&text, &path.display().to_string())?;
        tracing::debug!(
            manifest = %path.display(),
            commands = manifest.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    pub fn from_json_str(text: &str, origin: &str) -> HelpResult<Self> {
        if text.trim().is_empty() {
            return Err(HelpError::invalid_manifest(origin, "file is empty"));
        }
        let root: Value =
            serde_json::from_str(text).map_err(|e| HelpError::manifest_parse(origin, e))?;
        if !root.is_object() {
            return Err(HelpError::invalid_manifest(origin, "root is not an object"));
        }
        let file: ManifestFile =
            serde_json::from_value(root).map_err(|e| HelpError::manifest_parse(origin, e))?;
        Ok(Self {
            commands: file.scripts,
        })
    }

    pub fn from_commands<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let commands = names
            .into_iter()
            .map(|n| (n.into(), Value::Null))
            .collect();
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn command_names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn commands_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.commands
            .keys()
            .filter(|name| name.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}
