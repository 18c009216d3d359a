//! Renderer-independent player controller: look angles, movement shaping,
//! ground tests, the per-tick jump logic, and level/config data.

pub mod components;
pub mod config;
pub mod ground;
pub mod level;
pub mod look;
pub mod movement;
pub mod physics;
pub mod player;

pub use components::*;
pub use config::{load_config_from_file, CameraConfig, CameraMode, ControllerConfig};
pub use ground::{GroundSample, GroundTest};
pub use level::{builtin_levels, load_levels_from_file, Level, LevelBox, LevelSet};
pub use look::LookAngles;
pub use movement::{MovementIntent, VelocityMode};
pub use physics::{physics_dt, step_character, JumpState, StepOutcome};
pub use player::*;
