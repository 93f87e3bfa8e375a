//! Game configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults for startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 640
//! target_fps = 60
//!
//! [sheet]
//! image = assets/walker.png
//! definition = assets/walker.json
//!
//! [walk]
//! scroll_step = 10
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 640;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SHEET_IMAGE: &str = "assets/walker.png";
const DEFAULT_SHEET_DEF: &str = "assets/walker.json";
const DEFAULT_SCROLL_STEP: i64 = 10;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window, sheet and walk settings.
///
/// Missing file or missing keys fall back to the defaults; frame pacing is
/// handed to the presentation layer via `target_fps`.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the sheet texture image.
    pub sheet_image: PathBuf,
    /// Path to the sheet definition JSON.
    pub sheet_def: PathBuf,
    /// Pixels the sprite scrolls per advance.
    pub scroll_step: i64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            sheet_image: PathBuf::from(DEFAULT_SHEET_IMAGE),
            sheet_def: PathBuf::from(DEFAULT_SHEET_DEF),
            scroll_step: DEFAULT_SCROLL_STEP,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [sheet] section
        if let Some(image) = config.get("sheet", "image") {
            self.sheet_image = PathBuf::from(image);
        }
        if let Some(definition) = config.get("sheet", "definition") {
            self.sheet_def = PathBuf::from(definition);
        }

        // [walk] section
        if let Some(step) = config.getint("walk", "scroll_step").ok().flatten() {
            // The scroll offset only ever grows; a non-positive step would
            // stall or reverse it.
            if step > 0 {
                self.scroll_step = step;
            } else {
                warn!(
                    "Ignoring non-positive scroll_step {}; using {}",
                    step, DEFAULT_SCROLL_STEP
                );
                self.scroll_step = DEFAULT_SCROLL_STEP;
            }
        }

        info!(
            "Loaded config: {}x{} window, fps={}, sheet={:?}, step={}",
            self.window_width, self.window_height, self.target_fps, self.sheet_image,
            self.scroll_step
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set(
            "sheet",
            "image",
            Some(self.sheet_image.display().to_string()),
        );
        config.set(
            "sheet",
            "definition",
            Some(self.sheet_def.display().to_string()),
        );

        config.set("walk", "scroll_step", Some(self.scroll_step.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 640);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.scroll_step, 10);
        assert_eq!(config.sheet_image, PathBuf::from("assets/walker.png"));
    }

    #[test]
    fn test_with_path_keeps_defaults() {
        let config = GameConfig::with_path("/tmp/other.ini");
        assert_eq!(config.config_path, PathBuf::from("/tmp/other.ini"));
        assert_eq!(config.window_width, 640);
    }

    #[test]
    fn test_non_positive_scroll_step_falls_back_to_default() {
        let path = std::env::temp_dir().join("spritewalk_negative_step.ini");
        std::fs::write(&path, "[walk]\nscroll_step = -5\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.scroll_step = 3;
        config.load_from_file().unwrap();
        assert_eq!(config.scroll_step, DEFAULT_SCROLL_STEP);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/spritewalk.ini");
        assert!(config.load_from_file().is_err());
        // Values untouched on failure.
        assert_eq!(config.target_fps, 60);
    }
}
