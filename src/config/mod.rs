//! Configuration module for recipebook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RECIPEBOOK_*)
//! 3. Project config (recipebook.toml)
//! 4. User config (~/.config/recipebook/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_PATH};
pub use types::{
    ColorMode, Config, InlineConfig, OutputConfig, Verbosity, WidgetsConfig, DEFAULT_DIST_DIR,
};
