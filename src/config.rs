//! Engine configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::color::is_hex_color;
use crate::consts::DEFAULT_HIGHLIGHT;
use crate::input::Viewport;

pub const VIEWPORT_VAR: &str = "PAGEBUILDER_VIEWPORT";
pub const HIGHLIGHT_VAR: &str = "PAGEBUILDER_HIGHLIGHT";

/// Error returned by [`EngineConfig::from_env`] and [`EngineConfig::from_values`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value is not usable.
    #[error("invalid {var}: `{value}` ({reason})")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Viewport preset the canvas starts in.
    pub viewport: Viewport,
    /// Outline color for the selected instance.
    pub highlight: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { viewport: Viewport::default(), highlight: DEFAULT_HIGHLIGHT.to_owned() }
    }
}

impl EngineConfig {
    /// Build typed engine config from environment variables.
    ///
    /// Optional:
    /// - `PAGEBUILDER_VIEWPORT`: `mobile`, `tablet` or `desktop` (default)
    /// - `PAGEBUILDER_HIGHLIGHT`: `#rgb` / `#rrggbb` outline color, default `#3b82f6`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env_opt(VIEWPORT_VAR).as_deref(), env_opt(HIGHLIGHT_VAR).as_deref())
    }

    /// Build config from raw optional values, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a present value is unusable.
    pub fn from_values(viewport: Option<&str>, highlight: Option<&str>) -> Result<Self, ConfigError> {
        let viewport = match viewport {
            None => Viewport::default(),
            Some(raw) => raw.parse().map_err(|e: crate::input::UnknownViewport| ConfigError::Invalid {
                var: VIEWPORT_VAR,
                value: raw.to_owned(),
                reason: e.to_string(),
            })?,
        };

        let highlight = match highlight {
            None => DEFAULT_HIGHLIGHT.to_owned(),
            Some(raw) if is_hex_color(raw) => raw.trim().to_owned(),
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    var: HIGHLIGHT_VAR,
                    value: raw.to_owned(),
                    reason: "expected #rgb or #rrggbb".to_owned(),
                });
            }
        };

        Ok(Self { viewport, highlight })
    }
}

fn env_opt(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
