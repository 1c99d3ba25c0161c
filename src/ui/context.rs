use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use recipebook::config::{ColorMode, Config, Verbosity};
use recipebook::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        // -v raises the configured level; it never lowers it.
        let verbosity = match verbose {
            0 => config.output.verbosity,
            1 => config.output.verbosity.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        };

        Self {
            json,
            verbosity,
            color,
            unicode,
        }
    }
}
