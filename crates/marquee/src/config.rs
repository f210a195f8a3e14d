//! Banner configuration as the host hands it over.
//!
//! The JSON keys follow the host's naming (`textAssembleAnimation`,
//! `duration_inS`, ...). Every styling field falls back to the effect's
//! default when absent; the two names are required.
//!
//! ```
//! use marquee::BannerConfig;
//!
//! let config = BannerConfig::from_json_str(
//!     r#"{
//!         "firstName": "Jonas",
//!         "lastName": "Kahnwald",
//!         "textAssembleAnimation": { "partCount": 64, "fontSize": "9rem" },
//!         "textMoveAnimation": { "direction": "right" }
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(config.text_assemble_animation.part_count, 64);
//! ```

use marquee_anim::{AnimationError, AssembleConfig, Direction, MoveConfig};
use marquee_text::{FontSize, TextError};
use serde::{Deserialize, Serialize};

/// Errors raised while reading or checking a [`BannerConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The input is not valid JSON or does not have the expected shape.
    Parse(String),

    /// A value is out of range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Failed to parse banner config: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid banner config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<AnimationError> for ConfigError {
    fn from(err: AnimationError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

impl From<TextError> for ConfigError {
    fn from(err: TextError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

/// Side the last name enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionSetting {
    #[default]
    Left,
    Right,
}

impl From<DirectionSetting> for Direction {
    fn from(setting: DirectionSetting) -> Self {
        match setting {
            DirectionSetting::Left => Direction::Left,
            DirectionSetting::Right => Direction::Right,
        }
    }
}

/// `textAssembleAnimation` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AssembleSettings {
    pub color: String,
    pub part_count: u32,
    #[serde(rename = "duration_inS")]
    pub duration_s: f32,
    #[serde(rename = "startDelay_inS")]
    pub start_delay_s: f32,
    pub font_size: String,
    pub min_screen_padding: f32,
}

impl Default for AssembleSettings {
    fn default() -> Self {
        let defaults = AssembleConfig::new("");
        Self {
            color: defaults.color,
            part_count: defaults.part_count,
            duration_s: defaults.duration_s,
            start_delay_s: defaults.start_delay_s,
            font_size: defaults.base_font_size.to_string(),
            min_screen_padding: defaults.min_screen_padding,
        }
    }
}

/// `textMoveAnimation` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MoveSettings {
    pub color: String,
    #[serde(rename = "duration_inS")]
    pub duration_s: f32,
    #[serde(rename = "startDelay_inS")]
    pub start_delay_s: f32,
    pub font_size: String,
    pub min_screen_padding: f32,
    pub direction: DirectionSetting,
}

impl Default for MoveSettings {
    fn default() -> Self {
        let defaults = MoveConfig::new("");
        Self {
            color: defaults.color,
            duration_s: defaults.duration_s,
            start_delay_s: defaults.start_delay_s,
            font_size: defaults.base_font_size.to_string(),
            min_screen_padding: defaults.min_screen_padding,
            direction: DirectionSetting::Left,
        }
    }
}

/// Everything the banner needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BannerConfig {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub text_assemble_animation: AssembleSettings,
    #[serde(default)]
    pub text_move_animation: MoveSettings,
}

impl BannerConfig {
    /// A config with default styling for the two names.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            text_assemble_animation: AssembleSettings::default(),
            text_move_animation: MoveSettings::default(),
        }
    }

    /// Parse and validate.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_name.trim().is_empty() {
            return Err(ConfigError::Invalid("firstName is empty".to_string()));
        }
        if self.last_name.trim().is_empty() {
            return Err(ConfigError::Invalid("lastName is empty".to_string()));
        }
        self.assemble_config()?;
        self.move_config()?;
        Ok(())
    }

    /// Effect config for the first name.
    pub fn assemble_config(&self) -> Result<AssembleConfig, ConfigError> {
        let settings = &self.text_assemble_animation;
        let config = AssembleConfig::new(self.first_name.clone())
            .color(settings.color.clone())
            .base_font_size(parse_font_size("textAssembleAnimation", &settings.font_size)?)
            .min_screen_padding(settings.min_screen_padding)
            .part_count(settings.part_count)
            .duration(settings.duration_s)
            .start_delay(settings.start_delay_s);
        config.validate()?;
        Ok(config)
    }

    /// Effect config for the last name.
    pub fn move_config(&self) -> Result<MoveConfig, ConfigError> {
        let settings = &self.text_move_animation;
        let config = MoveConfig::new(self.last_name.clone())
            .color(settings.color.clone())
            .base_font_size(parse_font_size("textMoveAnimation", &settings.font_size)?)
            .min_screen_padding(settings.min_screen_padding)
            .duration(settings.duration_s)
            .start_delay(settings.start_delay_s)
            .direction(settings.direction.into());
        config.validate()?;
        Ok(config)
    }
}

fn parse_font_size(section: &str, value: &str) -> Result<FontSize, ConfigError> {
    let size: FontSize = value
        .parse()
        .map_err(|err: TextError| ConfigError::Invalid(format!("{}.fontSize: {}", section, err)))?;
    if size.value <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "{}.fontSize must be positive, got {}",
            section, size
        )));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config =
            BannerConfig::from_json_str(r#"{ "firstName": "Jonas", "lastName": "Kahnwald" }"#)
                .unwrap();
        assert_eq!(config, BannerConfig::new("Jonas", "Kahnwald"));
        assert_eq!(config.text_assemble_animation.part_count, 49);
        assert_eq!(config.text_assemble_animation.font_size, "8rem");
        assert_eq!(config.text_move_animation.direction, DirectionSetting::Left);
    }

    #[test]
    fn test_host_key_names() {
        let config = BannerConfig::from_json_str(
            r##"{
                "firstName": "Jonas",
                "lastName": "Kahnwald",
                "textAssembleAnimation": {
                    "color": "#f0e6d2",
                    "partCount": 36,
                    "duration_inS": 6.5,
                    "startDelay_inS": 0.5,
                    "fontSize": "120px",
                    "minScreenPadding": 5
                },
                "textMoveAnimation": {
                    "duration_inS": 2,
                    "startDelay_inS": 7,
                    "fontSize": "4em",
                    "minScreenPadding": 20,
                    "direction": "right"
                }
            }"##,
        )
        .unwrap();

        let assemble = config.assemble_config().unwrap();
        assert_eq!(assemble.text, "Jonas");
        assert_eq!(assemble.color, "#f0e6d2");
        assert_eq!(assemble.part_count, 36);
        assert_eq!(assemble.duration_s, 6.5);
        assert_eq!(assemble.start_delay_s, 0.5);
        assert_eq!(assemble.base_font_size, FontSize::px(120.0));
        assert_eq!(assemble.min_screen_padding, 5.0);

        let text_move = config.move_config().unwrap();
        assert_eq!(text_move.text, "Kahnwald");
        assert_eq!(text_move.direction, Direction::Right);
        assert_eq!(text_move.start_delay_s, 7.0);
        assert_eq!(text_move.min_screen_padding, 20.0);
    }

    #[test]
    fn test_rejects_non_square_part_count() {
        let err = BannerConfig::from_json_str(
            r#"{ "firstName": "a", "lastName": "b", "textAssembleAnimation": { "partCount": 50 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("50")));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = BannerConfig::new("a", "b");
        config.text_move_animation.font_size = "large".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = BannerConfig::new("a", "b");
        config.text_assemble_animation.font_size = "0rem".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = BannerConfig::new("a", "b");
        config.text_assemble_animation.min_screen_padding = 100.0;
        assert!(config.validate().is_err());

        let mut config = BannerConfig::new("a", "b");
        config.text_move_animation.duration_s = -2.0;
        assert!(config.validate().is_err());

        assert!(BannerConfig::new(" ", "b").validate().is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            BannerConfig::from_json_str("{"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            BannerConfig::from_json_str(r#"{ "firstName": "a" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            BannerConfig::from_json_str(
                r#"{ "firstName": "a", "lastName": "b", "textMoveAnimation": { "direction": "up" } }"#
            ),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            BannerConfig::from_json_str(r#"{ "firstName": "a", "lastName": "b", "extra": 1 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_host_names() {
        let json = BannerConfig::new("Jonas", "Kahnwald").to_json_pretty().unwrap();
        assert!(json.contains("\"duration_inS\""));
        assert!(json.contains("\"startDelay_inS\""));
        assert!(json.contains("\"textMoveAnimation\""));
        assert_eq!(
            BannerConfig::from_json_str(&json).unwrap(),
            BannerConfig::new("Jonas", "Kahnwald")
        );
    }
}
