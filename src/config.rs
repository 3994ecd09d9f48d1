use crate::engine::{CssProperty, Unit};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Initial form state
    #[serde(default)]
    pub defaults: FormDefaults,

    // Preview and copy-button behaviour
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Initial values of the form fields
/// Widths and values are kept as text, exactly as a user would type them
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormDefaults {
    #[serde(default = "default_min_width")]
    pub min_width: String,
    #[serde(default = "default_max_width")]
    pub max_width: String,
    #[serde(default = "default_min_value")]
    pub min_value: String,
    #[serde(default = "default_max_value")]
    pub max_value: String,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub property: CssProperty,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            min_width: default_min_width(),
            max_width: default_max_width(),
            min_value: default_min_value(),
            max_value: default_max_value(),
            unit: Unit::default(),
            property: CssProperty::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// How long the copy button shows its confirmation
    #[serde(default = "default_copy_confirmation_ms")]
    pub copy_confirmation_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            copy_confirmation_ms: default_copy_confirmation_ms(),
        }
    }
}

impl PreviewConfig {
    pub fn copy_confirmation(&self) -> Duration {
        Duration::from_millis(self.copy_confirmation_ms)
    }
}

fn default_min_width() -> String {
    "320".to_string()
}

fn default_max_width() -> String {
    "1280".to_string()
}

fn default_min_value() -> String {
    "1".to_string()
}

fn default_max_value() -> String {
    "3".to_string()
}

fn default_copy_confirmation_ms() -> u64 {
    2000
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.defaults.min_width, "320");
        assert_eq!(config.defaults.max_width, "1280");
        assert_eq!(config.defaults.unit, Unit::Rem);
        assert_eq!(config.defaults.property, CssProperty::FontSize);
        assert_eq!(config.preview.copy_confirmation(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_config() {
        let config = Config::load_from_str(
            r#"
[defaults]
min_width = "375"
unit = "px"
property = "font-size"

[preview]
copy_confirmation_ms = 500
"#,
        )
        .unwrap();

        assert_eq!(config.defaults.min_width, "375");
        assert_eq!(config.defaults.max_width, "1280");
        assert_eq!(config.defaults.unit, Unit::Px);
        assert_eq!(config.preview.copy_confirmation_ms, 500);
    }

    #[test]
    fn test_unknown_property_is_rejected() {
        let result = Config::load_from_str(
            r#"
[defaults]
property = "margin"
"#,
        );
        assert!(result.is_err());
    }
}
