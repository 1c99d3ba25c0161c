pub mod catalog;
pub mod inline;
pub mod widget;

use recipebook::config::{Config, PROJECT_CONFIG_FILE};

use crate::ui::theme::Icon;

/// Load config for the current directory, printing unknown-key warnings.
///
/// A project config that fails to parse is an error; a missing one falls
/// back to the user config and defaults.
pub fn load_config(json: bool) -> anyhow::Result<Config> {
    let project_root = std::env::current_dir()?;
    let project_config = project_root.join(PROJECT_CONFIG_FILE);

    if !project_config.exists() {
        return Ok(Config::load_or_default(Some(&project_root)));
    }

    let (config, warnings) = Config::load_with_warnings(&project_config)?;
    if !json {
        let caps = crate::ui::terminal::detect_capabilities();
        for warning in &warnings {
            eprintln!(
                "{} {}",
                Icon::Warning.render(caps.supports_color, caps.supports_unicode),
                warning
            );
        }
    }
    Ok(config.with_env_overrides())
}
