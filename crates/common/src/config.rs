//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PosemetricError, PosemetricResult};

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Video frame geometry used to denormalize keypoints.
    pub geometry: FrameGeometry,

    /// Default CSV destination.
    pub output: PathBuf,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Pixel dimensions and frame rate of the source video.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameGeometry {
    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Frames per second, used to turn frame indices into seconds.
    pub fps: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "posemetric=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            geometry: FrameGeometry::default(),
            output: PathBuf::from("dists.csv"),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            fps: 30.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl FrameGeometry {
    pub fn new(width: u32, height: u32, fps: f64) -> Self {
        Self { width, height, fps }
    }

    /// Length of the frame diagonal in pixels.
    pub fn diagonal(&self) -> f64 {
        f64::from(self.width).hypot(f64::from(self.height))
    }

    /// Seconds elapsed at the given frame index, if the frame rate allows it.
    pub fn frame_to_secs(&self, frame: u64) -> Option<f64> {
        if self.fps.is_finite() && self.fps > 0.0 {
            Some(frame as f64 / self.fps)
        } else {
            None
        }
    }

    /// Reject geometry that would make pixel or time conversion meaningless.
    pub fn validate(&self) -> PosemetricResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PosemetricError::config(format!(
                "frame dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(PosemetricError::config(format!(
                "fps must be a positive number, got {}",
                self.fps
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path. Unlike [`AppConfig::load`], a
    /// missing, malformed or invalid file is an error.
    pub fn load_from(path: &Path) -> PosemetricResult<Self> {
        if !path.exists() {
            return Err(PosemetricError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location, returning the path written.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    pub fn validate(&self) -> PosemetricResult<()> {
        self.geometry.validate()
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("posemetric").join("config.json")
}
