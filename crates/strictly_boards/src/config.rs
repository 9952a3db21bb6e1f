//! Board configuration: render style, hint mode, and named variants.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Layout used to draw the board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RenderStyle {
    /// 3x3 grid with separators and the legend beside each row.
    #[default]
    Standard,
    /// One character per cell, `.` for empty cells.
    Compact,
}

impl FromStr for RenderStyle {
    type Err = ConfigError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(s, "render style")
    }
}

/// Whether rendering appends win-threat hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum HintMode {
    /// Render the board only.
    #[default]
    Disabled,
    /// Render the board followed by hint lines.
    Enabled,
}

impl HintMode {
    /// Returns true when hints are shown.
    pub fn is_enabled(self) -> bool {
        matches!(self, HintMode::Enabled)
    }
}

impl From<bool> for HintMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            HintMode::Enabled
        } else {
            HintMode::Disabled
        }
    }
}

impl From<HintMode> for bool {
    fn from(mode: HintMode) -> Self {
        mode.is_enabled()
    }
}

/// The four classic boards, as presets over style and hints.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BoardVariant {
    /// Standard rendering, no hints.
    #[default]
    Plain,
    /// Compact rendering, no hints.
    Mini,
    /// Standard rendering with hints.
    Hint,
    /// Compact rendering with hints.
    Hybrid,
}

impl BoardVariant {
    /// Configuration this variant stands for.
    pub fn config(self) -> BoardConfig {
        let (render_style, hint_mode) = match self {
            BoardVariant::Plain => (RenderStyle::Standard, HintMode::Disabled),
            BoardVariant::Mini => (RenderStyle::Compact, HintMode::Disabled),
            BoardVariant::Hint => (RenderStyle::Standard, HintMode::Enabled),
            BoardVariant::Hybrid => (RenderStyle::Compact, HintMode::Enabled),
        };
        BoardConfig::new(render_style, hint_mode)
    }
}

impl FromStr for BoardVariant {
    type Err = ConfigError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(s, "board variant")
    }
}

/// Case-insensitive lookup of a strum-named enum.
#[track_caller]
fn parse_name<T>(s: &str, kind: &str) -> Result<T, ConfigError>
where
    T: IntoEnumIterator + Into<&'static str> + Copy,
{
    let wanted = s.trim().to_lowercase();
    match T::iter().find(|candidate| Into::<&'static str>::into(*candidate) == wanted) {
        Some(found) => Ok(found),
        None => {
            let known: Vec<&'static str> = T::iter().map(Into::into).collect();
            Err(ConfigError::new(format!(
                "Unknown {} {:?} (expected one of: {})",
                kind,
                s,
                known.join(", ")
            )))
        }
    }
}

/// Settings fixed when a board is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// How the board is drawn.
    #[serde(default = "default_render_style")]
    render_style: RenderStyle,

    /// Whether hints follow the board.
    #[serde(default = "default_hint_mode")]
    hint_mode: HintMode,
}

fn default_render_style() -> RenderStyle {
    RenderStyle::Standard
}

fn default_hint_mode() -> HintMode {
    HintMode::Disabled
}

impl BoardConfig {
    /// Creates a configuration.
    pub fn new(render_style: RenderStyle, hint_mode: HintMode) -> Self {
        Self {
            render_style,
            hint_mode,
        }
    }

    /// Replaces the render style.
    pub fn with_render_style(self, render_style: RenderStyle) -> Self {
        Self {
            render_style,
            ..self
        }
    }

    /// Replaces the hint mode.
    pub fn with_hint_mode(self, hint_mode: HintMode) -> Self {
        Self { hint_mode, ..self }
    }

    /// Parses configuration from TOML text.
    ///
    /// ```toml
    /// render_style = "compact"
    /// hint_mode = true
    /// ```
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(render_style = ?config.render_style, hint_mode = ?config.hint_mode, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_style_parse_ignores_case() {
        assert_eq!("Compact".parse::<RenderStyle>().unwrap(), RenderStyle::Compact);
        assert_eq!(" standard ".parse::<RenderStyle>().unwrap(), RenderStyle::Standard);
    }

    #[test]
    fn test_unknown_style_lists_choices() {
        let err = "fancy".parse::<RenderStyle>().unwrap_err();
        assert!(err.message.contains("\"fancy\""), "{}", err.message);
        assert!(err.message.contains("standard, compact"), "{}", err.message);
    }

    #[test]
    fn test_unknown_name_records_parse_site() {
        let style = "fancy".parse::<RenderStyle>().unwrap_err();
        let variant = "mega".parse::<BoardVariant>().unwrap_err();
        assert!(style.file.ends_with("config.rs"), "{}", style.file);
        assert_ne!(style.line, variant.line);
    }

    #[test]
    fn test_variants_map_to_configs() {
        assert_eq!(
            BoardVariant::Plain.config(),
            BoardConfig::new(RenderStyle::Standard, HintMode::Disabled)
        );
        assert_eq!(
            BoardVariant::Mini.config(),
            BoardConfig::new(RenderStyle::Compact, HintMode::Disabled)
        );
        assert_eq!(
            BoardVariant::Hint.config(),
            BoardConfig::new(RenderStyle::Standard, HintMode::Enabled)
        );
        assert_eq!(
            BoardVariant::Hybrid.config(),
            BoardConfig::new(RenderStyle::Compact, HintMode::Enabled)
        );
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("HYBRID".parse::<BoardVariant>().unwrap(), BoardVariant::Hybrid);
        assert!("mega".parse::<BoardVariant>().is_err());
    }

    #[test]
    fn test_toml_defaults() {
        let config = BoardConfig::from_toml("").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_toml_full() {
        let config = BoardConfig::from_toml("render_style = \"compact\"\nhint_mode = true\n").unwrap();
        assert_eq!(*config.render_style(), RenderStyle::Compact);
        assert!(config.hint_mode().is_enabled());
    }

    #[test]
    fn test_toml_rejects_unknown_style() {
        assert!(BoardConfig::from_toml("render_style = \"tiny\"").is_err());
    }

    #[test]
    fn test_hint_mode_from_bool() {
        assert_eq!(HintMode::from(true), HintMode::Enabled);
        assert_eq!(HintMode::from(false), HintMode::Disabled);
        assert!(!bool::from(HintMode::Disabled));
    }
}
