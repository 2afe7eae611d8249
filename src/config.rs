use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::help::RenderOptions;

/// Canonical application identity (used by help/version surfaces).
pub const APP_NAME: &str = "fixhelp";
pub const APP_DESC: &str = "Markdown help generator for repository fix commands";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_MANIFEST: &str = "package.json";
pub const DEFAULT_PREFIX: &str = "fix:";
pub const DEFAULT_RUNNER: &str = "npm run";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Process-level configuration snapshot, read from the environment once at
/// startup. Command-line flags override these values per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub manifest_path: PathBuf,
    pub prefix: String,
    pub runner: String,
    pub log_filter: String,
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source; blank values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str, default: &str| {
            non_blank(lookup(name)).unwrap_or_else(|| default.to_string())
        };
        Self {
            manifest_path: PathBuf::from(get("FIXHELP_MANIFEST", DEFAULT_MANIFEST)),
            prefix: get("FIXHELP_PREFIX", DEFAULT_PREFIX),
            runner: get("FIXHELP_RUNNER", DEFAULT_RUNNER),
            log_filter: get("FIXHELP_LOG", DEFAULT_LOG_FILTER),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            prefix: self.prefix.clone(),
            runner: self.runner.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

pub fn init_app_config() {
    let _ = APP_CONFIG.set(AppConfig::from_env());
}

pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::from_env)
}
