//! Game configuration resource.
//!
//! Window and gameplay tuning loaded from an INI file. Missing file or
//! missing keys fall back to the defaults below, so the game always starts.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 540
//! target_fps = 120
//!
//! [game]
//! spawn_interval = 1.0
//! traversal_min = 2.0
//! traversal_max = 4.0
//! projectile_duration = 2.0
//! projectile_reach = 1000.0
//! win_threshold = 30
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 540;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_SPAWN_INTERVAL: f32 = 1.0;
const DEFAULT_TRAVERSAL_MIN: f32 = 2.0;
const DEFAULT_TRAVERSAL_MAX: f32 = 4.0;
const DEFAULT_PROJECTILE_DURATION: f32 = 2.0;
const DEFAULT_PROJECTILE_REACH: f32 = 1000.0;
const DEFAULT_WIN_THRESHOLD: u32 = 30;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Seconds between monster spawns.
    pub spawn_interval: f32,
    /// Shortest monster traversal duration in seconds.
    pub traversal_min: f32,
    /// Longest monster traversal duration in seconds.
    pub traversal_max: f32,
    /// Projectile travel duration in seconds.
    pub projectile_duration: f32,
    /// Distance a projectile travels; large enough to always leave the
    /// screen.
    pub projectile_reach: f32,
    /// The game is won once the destroyed count exceeds this.
    pub win_threshold: u32,
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
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            traversal_min: DEFAULT_TRAVERSAL_MIN,
            traversal_max: DEFAULT_TRAVERSAL_MAX,
            projectile_duration: DEFAULT_PROJECTILE_DURATION,
            projectile_reach: DEFAULT_PROJECTILE_REACH,
            win_threshold: DEFAULT_WIN_THRESHOLD,
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

        // [game] section
        if let Some(v) = config.getfloat("game", "spawn_interval").ok().flatten() {
            self.spawn_interval = v as f32;
        }
        if let Some(v) = config.getfloat("game", "traversal_min").ok().flatten() {
            self.traversal_min = v as f32;
        }
        if let Some(v) = config.getfloat("game", "traversal_max").ok().flatten() {
            self.traversal_max = v as f32;
        }
        if let Some(v) = config
            .getfloat("game", "projectile_duration")
            .ok()
            .flatten()
        {
            self.projectile_duration = v as f32;
        }
        if let Some(v) = config.getfloat("game", "projectile_reach").ok().flatten() {
            self.projectile_reach = v as f32;
        }
        if let Some(v) = config.getuint("game", "win_threshold").ok().flatten() {
            self.win_threshold = v as u32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, spawn every {}s, win past {} kills",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.spawn_interval,
            self.win_threshold
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_tuning() {
        let config = GameConfig::new();
        assert_eq!(config.spawn_interval, 1.0);
        assert_eq!(config.traversal_min, 2.0);
        assert_eq!(config.traversal_max, 4.0);
        assert_eq!(config.projectile_duration, 2.0);
        assert_eq!(config.projectile_reach, 1000.0);
        assert_eq!(config.win_threshold, 30);
    }

    #[test]
    fn missing_file_is_an_error_but_defaults_survive() {
        let mut config = GameConfig::with_path("./definitely-not-here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.win_threshold, DEFAULT_WIN_THRESHOLD);
    }
}
