use std::env;

use tracing::warn;

/// How scan results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored report block (default)
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Whether terminal output is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Let the `colored` crate decide from the environment
    Auto,
    Always,
    Never,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so every setting here
/// can live there too. The rule table itself is fixed and has no settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unknown values fall back to the defaults with a warning.
    pub fn load() -> Self {
        Self::from_values(
            env::var("PHISHSCAN_FORMAT").ok().as_deref(),
            env::var("PHISHSCAN_COLOR").ok().as_deref(),
            env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        )
    }

    /// Build a config from raw variable values.
    pub fn from_values(format: Option<&str>, color: Option<&str>, no_color: bool) -> Self {
        let format = match format {
            Some("json") => OutputFormat::Json,
            Some("text") | None => OutputFormat::Text,
            Some(other) => {
                warn!(value = other, "unknown PHISHSCAN_FORMAT, using text");
                OutputFormat::Text
            }
        };

        let color = match color {
            Some("always") => ColorChoice::Always,
            Some("never") => ColorChoice::Never,
            Some("auto") | None => ColorChoice::Auto,
            Some(other) => {
                warn!(value = other, "unknown PHISHSCAN_COLOR, using auto");
                ColorChoice::Auto
            }
        };
        // NO_COLOR wins over everything but an explicit "always"
        let color = if no_color && color == ColorChoice::Auto {
            ColorChoice::Never
        } else {
            color
        };

        Self { format, color }
    }

    /// Apply the color choice to the global `colored` override.
    pub fn apply_color(&self) {
        match self.color {
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
            ColorChoice::Auto => {}
        }
    }
}
