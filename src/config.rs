//! Engine configuration.
//!
//! Settings loaded from an INI configuration file, with safe defaults for
//! every key so the demo starts even without a file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [scene]
//! width = 800
//! height = 450
//! target_fps = 60
//! background = 18,18,24
//!
//! [window]
//! width = 800
//! height = 450
//! title = Universe2D
//! vsync = true
//! ```

use std::path::PathBuf;

use configparser::ini::Ini;
use log::info;

use crate::error::EngineError;
use crate::math::Vector2;
use crate::surface::Color;

/// Default safe values for startup
const DEFAULT_SCENE_WIDTH: u32 = 800;
const DEFAULT_SCENE_HEIGHT: u32 = 450;
const DEFAULT_TARGET_FPS: f64 = 60.0;
const DEFAULT_BACKGROUND: Color = Color::rgb(18, 18, 24);
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 450;
const DEFAULT_WINDOW_TITLE: &str = "Universe2D";
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration.
///
/// Values not present in the file keep their defaults; numeric keys that
/// fail to parse are ignored the same way, while a malformed background
/// color is reported as an error.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Scene width in pixels (also the boundary-containment width).
    pub scene_width: u32,
    /// Scene height in pixels.
    pub scene_height: u32,
    /// Expected updates per second used to normalize motion.
    pub target_fps: f64,
    /// Background fill color.
    pub background: Color,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Window title.
    pub window_title: String,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a configuration with safe default values.
    pub fn new() -> Self {
        Self {
            scene_width: DEFAULT_SCENE_WIDTH,
            scene_height: DEFAULT_SCENE_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            background: DEFAULT_BACKGROUND,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            vsync: DEFAULT_VSYNC,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing keys retain their current values. Returns an error if the
    /// file cannot be read or the background color is malformed.
    pub fn load_from_file(&mut self) -> Result<(), EngineError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| {
            EngineError::invalid_object("config file", e)
        })?;

        // [scene] section
        if let Some(width) = config.getuint("scene", "width").ok().flatten() {
            self.scene_width = width as u32;
        }
        if let Some(height) = config.getuint("scene", "height").ok().flatten() {
            self.scene_height = height as u32;
        }
        if let Some(fps) = config.getfloat("scene", "target_fps").ok().flatten() {
            self.target_fps = fps;
        }
        if let Some(background) = config.get("scene", "background") {
            self.background = Color::from_rgb_str(&background)?;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        info!(
            "Loaded config: {}x{} scene, {}x{} window, fps={}, vsync={}",
            self.scene_width,
            self.scene_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), EngineError> {
        let mut config = Ini::new();

        // [scene] section
        config.set("scene", "width", Some(self.scene_width.to_string()));
        config.set("scene", "height", Some(self.scene_height.to_string()));
        config.set("scene", "target_fps", Some(self.target_fps.to_string()));
        config.set(
            "scene",
            "background",
            Some(format!(
                "{},{},{}",
                self.background.r, self.background.g, self.background.b
            )),
        );

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.window_title.clone()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config.write(&self.config_path).map_err(|e| {
            EngineError::invalid_object("config file", e.to_string())
        })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Scene bounds as a vector (width, height).
    pub fn bounds(&self) -> Vector2 {
        Vector2::new(f64::from(self.scene_width), f64::from(self.scene_height))
    }

    /// Window size (width, height).
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.scene_width, 800);
        assert_eq!(config.scene_height, 450);
        assert_eq!(config.target_fps, 60.0);
        assert_eq!(config.background, Color::rgb(18, 18, 24));
        assert_eq!(config.window_title, "Universe2D");
        assert!(config.vsync);
        assert_eq!(config.bounds(), Vector2::new(800.0, 450.0));
    }

    #[test]
    fn test_missing_file_is_an_error_but_keeps_defaults() {
        let mut config = EngineConfig::with_path("./definitely/not/here.ini");
        let result = config.load_from_file();
        assert!(matches!(result, Err(EngineError::InvalidObject { .. })));
        assert_eq!(config.scene_width, 800);
        assert_eq!(config.target_fps, 60.0);
    }

    #[test]
    fn test_malformed_background_is_rejected() {
        let path = std::env::temp_dir().join("universe2d_config_bad_background.ini");
        std::fs::write(&path, "[scene]\nbackground = not,a,color\n").unwrap();

        let mut config = EngineConfig::with_path(&path);
        let result = config.load_from_file();

        assert!(matches!(result, Err(EngineError::InvalidObject { .. })));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = std::env::temp_dir().join("universe2d_config_roundtrip.ini");

        let mut saved = EngineConfig::with_path(&path);
        saved.scene_width = 320;
        saved.scene_height = 200;
        saved.target_fps = 30.0;
        saved.background = Color::rgb(1, 2, 3);
        saved.window_title = "roundtrip".to_string();
        saved.vsync = false;
        saved.save_to_file().unwrap();

        let mut loaded = EngineConfig::with_path(&path);
        loaded.load_from_file().unwrap();

        assert_eq!(loaded.scene_width, 320);
        assert_eq!(loaded.scene_height, 200);
        assert_eq!(loaded.target_fps, 30.0);
        assert_eq!(loaded.background, Color::rgb(1, 2, 3));
        assert_eq!(loaded.window_title, "roundtrip");
        assert!(!loaded.vsync);

        let _ = std::fs::remove_file(&path);
    }
}
