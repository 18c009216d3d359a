//! Controller tuning, loaded from RON.
//!
//! Every field has a default so a config file only needs the values it
//! changes:
//!
//! ```ron
//! (
//!     speed: 6.0,
//!     velocity_mode: Blend(factor: 0.2),
//!     ground_test: ContactNormal(min_up: 0.5),
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use crate::ground::GroundTest;
use crate::look::DEFAULT_PITCH_LIMIT;
use crate::movement::VelocityMode;
use crate::player::{GRAVITY, JUMP_VELOCITY, KILL_PLANE_Y, MOUSE_SENSITIVITY, PLAYER_SPEED};

/// Camera view mode
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    FirstPerson,
    /// Fixed offset behind the player, looking at it
    Chase,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::FirstPerson => CameraMode::Chase,
            CameraMode::Chase => CameraMode::FirstPerson,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub mode: CameraMode,
    /// Camera height above the body centre in first person
    pub eye_height: f32,
    /// Offset from the body in chase mode, before yaw rotation (+Z is behind)
    pub chase_offset: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mode: CameraMode::FirstPerson,
            eye_height: 0.6,
            chase_offset: [0.0, 5.0, 10.0],
            fov_degrees: 75.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ControllerConfig {
    /// Horizontal speed in units per second
    pub speed: f32,
    /// Vertical speed written on the tick a jump fires
    pub jump_velocity: f32,
    pub velocity_mode: VelocityMode,
    pub ground_test: GroundTest,
    /// Radians of look per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Pitch is clamped to +/- this many radians
    pub pitch_limit: f32,
    /// World gravity along Y
    pub gravity: f32,
    pub kill_plane_y: f32,
    /// Index into the level set used at startup
    pub start_level: usize,
    /// Draw physics colliders
    pub debug_render: bool,
    pub camera: CameraConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            jump_velocity: JUMP_VELOCITY,
            velocity_mode: VelocityMode::Assign,
            ground_test: GroundTest::default(),
            mouse_sensitivity: MOUSE_SENSITIVITY,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            gravity: GRAVITY,
            kill_plane_y: KILL_PLANE_Y,
            start_level: 0,
            debug_render: false,
            camera: CameraConfig::default(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("speed", self.speed),
            ("jump_velocity", self.jump_velocity),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("pitch_limit", self.pitch_limit),
            ("gravity", self.gravity),
            ("kill_plane_y", self.kill_plane_y),
            ("camera.eye_height", self.camera.eye_height),
            ("camera.fov_degrees", self.camera.fov_degrees),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{name} must be finite (got {value})"));
            }
        }

        if self.speed <= 0.0 {
            return Err(format!("speed must be positive (got {})", self.speed));
        }
        if self.pitch_limit <= 0.0 || self.pitch_limit > FRAC_PI_2 {
            return Err(format!(
                "pitch_limit must be in (0, pi/2] (got {})",
                self.pitch_limit
            ));
        }
        if self.camera.fov_degrees <= 0.0 || self.camera.fov_degrees >= 180.0 {
            return Err(format!(
                "camera.fov_degrees must be in (0, 180) (got {})",
                self.camera.fov_degrees
            ));
        }

        match self.velocity_mode {
            VelocityMode::Assign => {}
            VelocityMode::Blend { factor } => {
                if !(0.0..=1.0).contains(&factor) {
                    return Err(format!("blend factor must be in [0, 1] (got {factor})"));
                }
            }
            VelocityMode::Accelerate { accel, brake } => {
                if !(accel > 0.0 && brake > 0.0 && accel.is_finite() && brake.is_finite()) {
                    return Err(format!(
                        "accelerate rates must be positive (got accel={accel}, brake={brake})"
                    ));
                }
            }
        }

        match self.ground_test {
            GroundTest::RayCast { max_distance } if !(max_distance > 0.0) => Err(format!(
                "ray cast max_distance must be positive (got {max_distance})"
            )),
            GroundTest::VerticalSpeed { tolerance } if !(tolerance > 0.0) => Err(format!(
                "vertical speed tolerance must be positive (got {tolerance})"
            )),
            _ => Ok(()),
        }
    }
}

/// Parse and validate a controller config from RON text.
pub fn load_config_from_str(text: &str) -> Result<ControllerConfig, String> {
    let config: ControllerConfig =
        ron::from_str(text).map_err(|e| format!("ron parse failed: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// Load a controller config from a file path (RON).
pub fn load_config_from_file(path: impl AsRef<Path>) -> Result<ControllerConfig, String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| format!("failed to read {path:?}: {e}"))?;
    load_config_from_str(&text).map_err(|e| format!("{path:?}: {e}"))
}
