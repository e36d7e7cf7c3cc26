// src/config.rs

//! Configuration for the `fonttest` binary.
//!
//! Loaded from an optional JSON file. Every section falls back to its
//! `Default`, so an empty object (or no file at all) renders `"Test"` in the
//! built-in 8px font to the terminal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use fontem::{Format, Rgb};

/// Root of the `fonttest` configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text to render.
    pub text: String,
    pub font: FontConfig,
    pub canvas: CanvasConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            text: "Test".to_string(),
            font: FontConfig::default(),
            canvas: CanvasConfig::default(),
        }
    }
}

impl Config {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Which compiled-in font to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub name: String,
    /// Any style matches when unset.
    pub style: Option<String>,
    pub size: u16,
    /// `Some(true)` picks only run-length encoded fonts, `Some(false)` only raw ones.
    pub compressed: Option<bool>,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            name: "Pixel".to_string(),
            style: None,
            size: 8,
            compressed: None,
        }
    }
}

/// Target canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Sized to fit the text when unset.
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub format: Format,
    pub foreground: Rgb,
    pub background: Rgb,
    /// Where colour formats are written, as binary PPM.
    pub output: PathBuf,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: None,
            height: None,
            format: Format::Intensity,
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
            output: PathBuf::from("fonttest.ppm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.text, "Test");
        assert_eq!(config.font.size, 8);
        assert_eq!(config.canvas.format, Format::Intensity);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: Config = serde_json::from_str(
            r#"{
                "text": "Hello",
                "font": { "style": "regular", "compressed": true },
                "canvas": { "format": "rgb16", "foreground": [255, 0, 0], "width": 64 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.text, "Hello");
        assert_eq!(config.font.name, "Pixel");
        assert_eq!(config.font.style.as_deref(), Some("regular"));
        assert_eq!(config.font.compressed, Some(true));
        assert_eq!(config.canvas.format, Format::Rgb16);
        assert_eq!(config.canvas.foreground, Rgb::new(255, 0, 0));
        assert_eq!(config.canvas.background, Rgb::BLACK);
        assert_eq!(config.canvas.width, Some(64));
        assert_eq!(config.canvas.height, None);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{ "canvas": { "format": "cmyk" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = Config::load(Path::new("/nonexistent/fonttest.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/fonttest.json"));
    }
}
