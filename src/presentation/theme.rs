use crossterm::style::{Color, Stylize};

/// Design tokens for the recipebook CLI.
///
/// Only 5 semantic colors; icons come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
}

impl Icon {
    pub fn glyph(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Warning, true) => icons::WARNING,
            (Icon::Arrow, true) => icons::ARROW,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Warning, false) => icons_ascii::WARNING,
            (Icon::Arrow, false) => icons_ascii::ARROW,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Arrow => colors::INFO,
        }
    }

    pub fn render(self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.glyph(supports_unicode);
        if supports_color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}

pub fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        text.with(colors::DIM).to_string()
    } else {
        text.to_string()
    }
}
