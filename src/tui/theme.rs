//! Color theme resolved from configuration.

use crate::{ConfigError, ThemeConfig};
use ratatui::style::Color;
use std::str::FromStr;
use tictactoe_core::Player;
use tracing::instrument;

/// Resolved UI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// X marks and X's score.
    pub x: Color,
    /// O marks and O's score.
    pub o: Color,
    /// Title and borders.
    pub accent: Color,
    /// Winning line background.
    pub highlight: Color,
}

impl Theme {
    /// Parses every configured color name.
    #[instrument]
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            x: parse_color("x_color", config.x_color())?,
            o: parse_color("o_color", config.o_color())?,
            accent: parse_color("accent", config.accent())?,
            highlight: parse_color("highlight", config.highlight())?,
        })
    }

    /// Color for a player's mark.
    pub fn player(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            accent: Color::Cyan,
            highlight: Color::Green,
        }
    }
}

#[track_caller]
fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Unknown color '{}' for theme.{}", value, key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppConfig;

    #[test]
    fn test_default_config_matches_default_theme() {
        let theme = Theme::from_config(AppConfig::default().theme()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_hex_and_named_colors() {
        let config = AppConfig::from_toml_str(
            "[theme]\nx_color = \"#ff8800\"\nhighlight = \"lightgreen\"\n",
        )
        .unwrap();
        let theme = Theme::from_config(config.theme()).unwrap();
        assert_eq!(theme.x, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(theme.highlight, Color::LightGreen);
        assert_eq!(theme.player(Player::O), Color::Red);
    }

    #[test]
    fn test_unknown_color_is_config_error() {
        let config = AppConfig::from_toml_str("[theme]\no_color = \"plaid\"\n").unwrap();
        let err = Theme::from_config(config.theme()).unwrap_err();
        assert!(err.message.contains("theme.o_color"));
    }
}
