//! Configuration data models
//!
//! This module defines the data structures used for application configuration.
//! Every section falls back to its defaults when missing from the file, so a
//! partial `config.json` is valid.

use crate::render::surface::{Color, Size};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas dimensions
    pub canvas: CanvasConfig,
    /// Pin and connector appearance
    pub pin: PinStyle,
    /// Label overlay appearance
    pub label: LabelStyle,
    /// Playback timing
    pub playback: PlaybackTiming,
}

/// Fixed pixel size of the drawing canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
}

/// Pin and connector appearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinStyle {
    /// Radius of the filled pin circle
    pub radius: f32,
    /// Pin fill color (also used for the preview pin)
    pub fill: Color,
    /// Connector line color
    pub connector: Color,
}

/// Label overlay appearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Font size of the label text
    pub font_size: f32,
    /// Fixed height of the label box
    pub box_height: f32,
    /// Horizontal padding on each side of the text
    pub padding: f32,
    /// Label box background
    pub background: Color,
    /// Label text color
    pub text: Color,
    /// Average glyph advance as a fraction of the font size, used when the
    /// surface has no real text shaper
    pub glyph_advance_ratio: f32,
}

/// Delays of the two stages of each playback step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackTiming {
    /// How long a newly revealed pin shows its label (milliseconds)
    pub reveal_ms: u64,
    /// Pause after the label is hidden before the next pin (milliseconds)
    pub conceal_ms: u64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for PinStyle {
    fn default() -> Self {
        Self {
            radius: 10.0,
            fill: Color::RED,
            connector: Color::BLACK,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 25.0,
            box_height: 30.0,
            padding: 5.0,
            background: Color::WHITE,
            text: Color::BLACK,
            glyph_advance_ratio: 0.5,
        }
    }
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            reveal_ms: 1000,
            conceal_ms: 400,
        }
    }
}

impl CanvasConfig {
    /// Canvas size as a surface size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl PlaybackTiming {
    /// Delay during which the label of a newly revealed pin is visible
    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    /// Delay between hiding a label and revealing the next pin
    pub fn conceal(&self) -> Duration {
        Duration::from_millis(self.conceal_ms)
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl AppConfig {
    /// Replace non-positive or non-finite dimensions with their defaults
    ///
    /// Returns true if anything had to be corrected.
    pub fn sanitize(&mut self) -> bool {
        let before = *self;
        let canvas = CanvasConfig::default();
        let pin = PinStyle::default();
        let label = LabelStyle::default();

        self.canvas.width = positive_or(self.canvas.width, canvas.width);
        self.canvas.height = positive_or(self.canvas.height, canvas.height);
        self.pin.radius = positive_or(self.pin.radius, pin.radius);
        self.label.font_size = positive_or(self.label.font_size, label.font_size);
        self.label.box_height = positive_or(self.label.box_height, label.box_height);
        self.label.glyph_advance_ratio =
            positive_or(self.label.glyph_advance_ratio, label.glyph_advance_ratio);
        if !self.label.padding.is_finite() || self.label.padding < 0.0 {
            self.label.padding = label.padding;
        }

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.pin.radius, 10.0);
        assert_eq!(config.label.font_size, 25.0);
        assert_eq!(config.label.box_height, 30.0);
        assert_eq!(config.playback.reveal(), Duration::from_millis(1000));
        assert_eq!(config.playback.conceal(), Duration::from_millis(400));
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "playback": { "reveal_ms": 250 } }"#).unwrap();
        assert_eq!(config.playback.reveal_ms, 250);
        assert_eq!(config.playback.conceal_ms, 400);
        assert_eq!(config.canvas, CanvasConfig::default());
    }

    #[test]
    fn test_sanitize_replaces_bad_values() {
        let mut config = AppConfig::default();
        config.canvas.width = -5.0;
        config.pin.radius = f32::NAN;
        config.label.padding = -1.0;

        assert!(config.sanitize());
        assert_eq!(config, AppConfig::default());
        assert!(!config.sanitize());
    }
}
