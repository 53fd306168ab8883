use crossterm::style::{Color, Stylize};

/// Design tokens for playdeploy output.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const DEPLOY: &str = "📦";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const DEPLOY: &str = "[DEPLOY]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Deploy,
}

impl Icon {
    pub fn glyph(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Warning, true) => icons::WARNING,
            (Icon::Warning, false) => icons_ascii::WARNING,
            (Icon::Progress, true) => icons::PROGRESS,
            (Icon::Progress, false) => icons_ascii::PROGRESS,
            (Icon::Arrow, true) => icons::ARROW,
            (Icon::Arrow, false) => icons_ascii::ARROW,
            (Icon::Deploy, true) => icons::DEPLOY,
            (Icon::Deploy, false) => icons_ascii::DEPLOY,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Progress | Icon::Deploy => colors::INFO,
            Icon::Arrow => colors::DIM,
        }
    }

    /// Glyph with its semantic color applied when `color` is on
    pub fn render(self, color: bool, unicode: bool) -> String {
        let glyph = self.glyph(unicode);
        if color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}

/// Dim secondary text when color is on
pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.with(colors::DIM).to_string()
    } else {
        text.to_string()
    }
}
