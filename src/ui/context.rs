use crate::config::{ColorMode, Config};
use crate::presentation::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    pub annotations: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
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

        let annotations = config.output.github_annotations && caps.is_github_actions;

        Self {
            json,
            color,
            unicode,
            annotations,
        }
    }
}
