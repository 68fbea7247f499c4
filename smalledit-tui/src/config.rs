use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration, read from `<config dir>/smalledit/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Delay before a pending gutter/status refresh is considered (ms)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Quiet time required since the last change before refreshing (ms)
    #[serde(default = "default_quiet_threshold_ms")]
    pub quiet_threshold_ms: u64,

    /// Show the line-number gutter at startup
    #[serde(default = "default_true")]
    pub line_numbers: bool,

    /// Start with word wrap enabled
    #[serde(default)]
    pub word_wrap: bool,

    /// Rows scrolled per mouse wheel step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: usize,

    /// Spaces inserted by the Tab key
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

fn default_debounce_ms() -> u64 {
    50
}

fn default_quiet_threshold_ms() -> u64 {
    45
}

fn default_true() -> bool {
    true
}

fn default_scroll_lines() -> usize {
    3
}

fn default_tab_width() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            quiet_threshold_ms: default_quiet_threshold_ms(),
            line_numbers: true,
            word_wrap: false,
            scroll_lines: default_scroll_lines(),
            tab_width: default_tab_width(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("smalledit").join("config.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. A missing file gives the defaults; a malformed one
    /// is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                tracing::warn!("Could not read config {:?}: {}", path, err);
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(err) => {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn quiet_threshold(&self) -> Duration {
        Duration::from_millis(self.quiet_threshold_ms)
    }
}
