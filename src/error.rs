use std::fmt;
use std::path::Path;

pub type HelpResult<T> = Result<T, HelpError>;

#[derive(Debug)]
pub enum HelpError {
    Io {
        context: String,
        source: std::io::Error,
    },
    JsonParse {
        context: String,
        source: serde_json::Error,
    },
    ManifestParse {
        origin: String,
        source: serde_json::Error,
    },
    InvalidManifest {
        origin: String,
        reason: String,
    },
}

impl HelpError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        HelpError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        HelpError::JsonParse {
            context: context.into(),
            source,
        }
    }

    pub fn manifest_parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
        HelpError::ManifestParse {
            origin: origin.into(),
            source,
        }
    }

    pub fn invalid_manifest(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        HelpError::InvalidManifest {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    pub fn unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::io(format!("cannot read manifest {}", path.display()), source)
    }
}

impl fmt::Display for HelpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpError::Io { context, source } => write!(f, "{context}: {source}"),
            HelpError::JsonParse { context, source } => write!(f, "{context}: {source}"),
            HelpError::ManifestParse { origin, source } => {
                write!(f, "invalid manifest {origin}: {source}")
            }
            HelpError::InvalidManifest { origin, reason } => {
                write!(f, "invalid manifest {origin}: {reason}")
            }
        }
    }
}

impl std::error::Error for HelpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HelpError::Io { source, .. } => Some(source),
            HelpError::JsonParse { source, .. } => Some(source),
            HelpError::ManifestParse { source, .. } => Some(source),
            HelpError::InvalidManifest { .. } => None,
        }
    }
}
