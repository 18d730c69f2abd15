use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use pageit::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub quiet: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, quiet: bool, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, quiet, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        quiet: bool,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            quiet,
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Human output is printed unless `--json` or `--quiet` is set
    pub fn human(&self) -> bool {
        !self.json && !self.quiet
    }
}
