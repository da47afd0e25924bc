//! Presenter configuration, stored as JSON

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_CONFIG_PATH: &str = "softraster.json";

/// Window and frame settings for the demo presenter.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub clear_color: Color,
    /// Index of the demo scene shown at startup
    pub demo: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "softraster".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
            clear_color: Color::BLACK,
            demo: 0,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        fs::write(path, self.to_json()?).map_err(|e| e.to_string())
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_json(&json)
    }
}
