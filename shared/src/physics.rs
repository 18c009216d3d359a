//! Grounded-movement-and-jump controller.
//!
//! The rigid body is owned by the physics engine; each tick this only
//! rewrites horizontal velocity and, on the tick a jump fires, vertical
//! velocity. Gravity and collision response stay with the engine.

use bevy::prelude::*;

use crate::config::ControllerConfig;
use crate::ground::GroundSample;
use crate::look::LookAngles;
use crate::movement::{apply_horizontal, desired_velocity, MovementIntent};
use crate::player::PHYSICS_MAX_DT;

/// Per-player jump bookkeeping, the only state the controller keeps between ticks
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct JumpState {
    /// Jump key state on the previous tick (edge detection)
    pub held_last_tick: bool,
    /// Set by a collision-start with level geometry; cleared when a jump fires
    pub latched: bool,
    /// Jumps performed since spawn
    pub jumps: u32,
}

impl JumpState {
    /// Forget everything, e.g. on respawn. A key held through the respawn
    /// still has to be released before the next jump.
    pub fn reset(&mut self) {
        let held = self.held_last_tick;
        *self = Self::default();
        self.held_last_tick = held;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub grounded: bool,
    pub jumped: bool,
}

/// Frame time as seen by the physics world, which never advances more than
/// `PHYSICS_MAX_DT` per frame. The controller integrates with this so its
/// rates stay in step with the bodies it drives.
pub fn physics_dt(frame_dt: f32) -> f32 {
    frame_dt.clamp(0.0, PHYSICS_MAX_DT)
}

/// Step the player controller one tick.
///
/// - Builds the input direction and rotates it by yaw
/// - Shapes horizontal velocity per `config.velocity_mode`
/// - Consumes the jump key on its down edge; jumps only if grounded at that instant
pub fn step_character(
    intent: &MovementIntent,
    look: &LookAngles,
    config: &ControllerConfig,
    sample: &GroundSample,
    velocity: &mut Vec3,
    jump: &mut JumpState,
    dt: f32,
) -> StepOutcome {
    // --- Horizontal ---
    let target = desired_velocity(intent, look.yaw, config.speed);
    *velocity = apply_horizontal(config.velocity_mode, *velocity, target, dt);

    // --- Ground ---
    let grounded = config.ground_test.is_grounded(sample, jump.latched);

    // --- Jump ---
    let pressed_edge = intent.jump && !jump.held_last_tick;
    jump.held_last_tick = intent.jump;

    let jumped = pressed_edge && grounded;
    if jumped {
        velocity.y = config.jump_velocity;
        jump.latched = false;
        jump.jumps += 1;
    }

    StepOutcome { grounded, jumped }
}
