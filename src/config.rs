//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`B2D_SECTION__KEY`)

use bounce2d_input::ForceTuning;
use bounce2d_physics::PhysicsConfig;
use bounce2d_render::OrthoCamera;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One simulated tick advances the world by exactly this much,
/// regardless of the timer interval or real elapsed time.
pub const TIMESTEP: f32 = 1.0 / 60.0;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub physics: PhysicsSection,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from default locations
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

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // B2D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("B2D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Bounce2D".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Orthographic view volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            left: -40.0,
            right: 40.0,
            bottom: -20.0,
            top: 20.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> OrthoCamera {
        OrthoCamera {
            left: self.left,
            right: self.right,
            bottom: self.bottom,
            top: self.top,
            near: self.near,
            far: self.far,
        }
    }
}

/// Physics configuration
///
/// The timestep itself is not configurable; it is the [`TIMESTEP`]
/// constant so the simulation stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsSection {
    /// Gravity vector [x, y] (negative y = down)
    pub gravity: [f32; 2],
    /// Simulation tick interval in milliseconds
    pub tick_interval_ms: u64,
    /// World boundary: beyond +/- this x, velocity is reversed
    pub boundary_x: f32,
}

impl Default for PhysicsSection {
    fn default() -> Self {
        Self {
            gravity: [0.0, -20.0],
            tick_interval_ms: 10,
            boundary_x: 39.0,
        }
    }
}

impl PhysicsSection {
    pub fn to_physics_config(&self) -> PhysicsConfig {
        PhysicsConfig::new(Vec2::new(self.gravity[0], self.gravity[1]), TIMESTEP)
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Left/right push on the actor
    pub lateral_force: f32,
    /// Upward push on the actor
    pub jump_force: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            lateral_force: 100.0,
            jump_force: 400.0,
        }
    }
}

impl InputConfig {
    pub fn to_force_tuning(&self) -> ForceTuning {
        ForceTuning {
            lateral: self.lateral_force,
            jump: self.jump_force,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Light position [x, y, z]
    pub light_pos: [f32; 3],
    /// Light color [r, g, b, a]
    pub light_color: [f32; 4],
    /// Ambient light strength
    pub ambient_strength: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.4, 0.4, 0.4, 1.0],
            light_pos: [0.2, 0.2, 1.0],
            light_color: [1.0, 1.0, 1.0, 1.0],
            ambient_strength: 0.25,
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

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.physics.gravity, [0.0, -20.0]);
        assert_eq!(config.physics.boundary_x, 39.0);
        assert_eq!(config.input.lateral_force, 100.0);
    }

    #[test]
    fn test_physics_section_keeps_fixed_timestep() {
        let physics = PhysicsSection::default().to_physics_config();
        assert_eq!(physics.timestep, TIMESTEP);
        assert_eq!(physics.gravity, Vec2::new(0.0, -20.0));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("boundary_x"));
    }
}
