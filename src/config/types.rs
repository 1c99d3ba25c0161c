//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConfigWarning;
use crate::error::RecipeBookResult;

use super::loader;

/// Built widget bundle directory, relative to the server root
pub const DEFAULT_DIST_DIR: &str = "ui-widget/dist";

fn default_true() -> bool {
    true
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DIST_DIR)
}

/// `[inline]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineConfig {
    /// Directory scanned for hashed HTML entry points.
    /// Falls back to the widget dist directory when unset.
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,

    /// Replace files via temp file + rename
    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            asset_dir: None,
            atomic_writes: true,
        }
    }
}

/// `[widgets]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetsConfig {
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub inline: InlineConfig,

    #[serde(default)]
    pub widgets: WidgetsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RecipeBookResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RecipeBookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (RECIPEBOOK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Directory the inline pass runs over
    pub fn asset_dir(&self) -> &Path {
        self.inline
            .asset_dir
            .as_deref()
            .unwrap_or(self.widgets.dist_dir.as_path())
    }
}
