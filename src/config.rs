//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hyperview_core::{CameraSettings, RotationPlane, SolidKind, Tumble, Vec3, Vec4};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HV_ANIMATION__INITIAL_PLANE=ZW -> animation.initial_plane = "ZW"
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperview".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
///
/// Angles are in degrees here and converted to radians for the camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// 3D eye position [x, y, z]
    pub position: [f32; 3],
    /// 3D look-at target
    pub target: [f32; 3],
    /// 3D up reference
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// 4D eye position [x, y, z, w]
    pub position_4d: [f32; 4],
    /// 4D look-at target
    pub target_4d: [f32; 4],
    /// 4D up reference
    pub up_4d: [f32; 4],
    /// Second 4D reference direction
    pub over_4d: [f32; 4],
    /// 4D projection angle in degrees
    pub fov_4d_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let s = CameraSettings::default();
        Self {
            position: s.position.to_array(),
            target: s.target.to_array(),
            up: s.up.to_array(),
            fov_deg: s.fov_y.to_degrees(),
            near: s.near,
            far: s.far,
            position_4d: s.position_4d.to_array(),
            target_4d: s.target_4d.to_array(),
            up_4d: s.up_4d.to_array(),
            over_4d: s.over_4d.to_array(),
            fov_4d_deg: s.fov_4d.to_degrees(),
        }
    }
}

impl CameraConfig {
    /// Camera settings for a viewport of the given aspect ratio
    pub fn to_settings(&self, aspect: f32) -> CameraSettings {
        CameraSettings {
            position: Vec3::from_array(self.position),
            target: Vec3::from_array(self.target),
            up: Vec3::from_array(self.up),
            fov_y: self.fov_deg.to_radians(),
            aspect,
            near: self.near,
            far: self.far,
            position_4d: Vec4::from_array(self.position_4d),
            target_4d: Vec4::from_array(self.target_4d),
            up_4d: Vec4::from_array(self.up_4d),
            over_4d: Vec4::from_array(self.over_4d),
            fov_4d: self.fov_4d_deg.to_radians(),
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Rotation plane active at startup
    pub initial_plane: RotationPlane,
    /// 4D rotation speed in radians per second
    pub rotation_speed: f32,
    /// 3D tumble about X in radians per second
    pub tumble_x_rate: f32,
    /// 3D tumble about Y in radians per second
    pub tumble_y_rate: f32,
    /// Solid shown at startup
    pub start_solid: SolidKind,
    /// Half-extent of both solids
    pub size: f32,
    /// Longest frame step in seconds; longer gaps are clamped
    pub max_delta: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let tumble = Tumble::default();
        Self {
            initial_plane: RotationPlane::XW,
            rotation_speed: hyperview_core::DEFAULT_ROTATION_SPEED,
            tumble_x_rate: tumble.rate_x,
            tumble_y_rate: tumble.rate_y,
            start_solid: SolidKind::Hypercube,
            size: 1.0,
            max_delta: 0.1,
        }
    }
}

impl AnimationConfig {
    pub fn tumble(&self) -> Tumble {
        Tumble::new(self.tumble_x_rate, self.tumble_y_rate)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.125, 0.125, 0.125, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.animation.initial_plane, RotationPlane::XW);
        assert_eq!(config.animation.start_solid, SolidKind::Hypercube);
        assert!((config.camera.fov_deg - 45.0).abs() < 1e-4);
        assert_eq!(config.rendering.background_color, [0.125, 0.125, 0.125, 1.0]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("initial_plane = \"XW\""));
        assert!(toml.contains("start_solid = \"Hypercube\""));
    }

    #[test]
    fn test_camera_config_round_trips_settings() {
        let settings = CameraConfig::default().to_settings(2.0);
        let defaults = CameraSettings::default();
        assert_eq!(settings.position, defaults.position);
        assert_eq!(settings.position_4d, defaults.position_4d);
        assert_eq!(settings.over_4d, defaults.over_4d);
        assert_eq!(settings.aspect, 2.0);
        assert!((settings.fov_y - FRAC_PI_4).abs() < 1e-6);
        assert!((settings.fov_4d - FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[animation]\nrotation_speed = 3.0\n").unwrap();
        assert_eq!(config.animation.rotation_speed, 3.0);
        assert_eq!(config.animation.size, 1.0);
        assert_eq!(config.window.height, 720);
    }
}
