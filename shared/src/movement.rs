//! Horizontal movement: key intent → world direction → velocity

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::look::{flat_forward, flat_right};

/// Held-key intent for one tick. Unset keys are `false`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MovementIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MovementIntent {
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// How the controller moves the body's horizontal velocity toward the target.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub enum VelocityMode {
    /// Overwrite horizontal velocity with the target every tick.
    #[default]
    Assign,
    /// Exponential smoothing per tick: `v += (target - v) * factor`.
    Blend { factor: f32 },
    /// Approach the target at a bounded rate (m/s^2); `brake` applies with no input.
    Accelerate { accel: f32, brake: f32 },
}

/// Local-space direction from the held keys (-Z forward, +X right),
/// normalized so diagonals are not faster. Zero when nothing (or only
/// opposing keys) is held.
pub fn input_direction(intent: &MovementIntent) -> Vec3 {
    let mut dir = Vec3::ZERO;
    if intent.forward {
        dir.z -= 1.0;
    }
    if intent.backward {
        dir.z += 1.0;
    }
    if intent.right {
        dir.x += 1.0;
    }
    if intent.left {
        dir.x -= 1.0;
    }
    dir.normalize_or_zero()
}

/// Rotate a local XZ direction into world space by `yaw`. Preserves length.
pub fn rotate_by_yaw(local: Vec3, yaw: f32) -> Vec3 {
    flat_right(yaw) * local.x - flat_forward(yaw) * local.z + Vec3::Y * local.y
}

/// World-space horizontal velocity the player is asking for
pub fn desired_velocity(intent: &MovementIntent, yaw: f32, speed: f32) -> Vec3 {
    rotate_by_yaw(input_direction(intent), yaw) * speed
}

/// Move the XZ components of `current` toward `target` according to `mode`.
/// The Y component of `current` is returned unchanged.
pub fn apply_horizontal(mode: VelocityMode, current: Vec3, target: Vec3, dt: f32) -> Vec3 {
    let horiz = Vec3::new(current.x, 0.0, current.z);
    let target = Vec3::new(target.x, 0.0, target.z);

    let new_horiz = match mode {
        VelocityMode::Assign => target,
        VelocityMode::Blend { factor } => horiz + (target - horiz) * factor.clamp(0.0, 1.0),
        VelocityMode::Accelerate { accel, brake } => {
            let rate = if target.length_squared() > 0.0 { accel } else { brake };
            let delta = target - horiz;
            let max_change = rate.max(0.0) * dt.max(0.0);
            let delta_len = delta.length();
            if delta_len <= max_change {
                target
            } else {
                horiz + delta * (max_change / delta_len)
            }
        }
    };

    Vec3::new(new_horiz.x, current.y, new_horiz.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_keys() -> [MovementIntent; 4] {
        [
            MovementIntent { forward: true, ..default() },
            MovementIntent { backward: true, ..default() },
            MovementIntent { left: true, ..default() },
            MovementIntent { right: true, ..default() },
        ]
    }

    #[test]
    fn test_single_direction_speed_matches_config() {
        for yaw in [0.0_f32, 0.7, -1.3, 3.14, 42.0] {
            for intent in single_keys() {
                let v = apply_horizontal(
                    VelocityMode::Assign,
                    Vec3::new(0.0, -3.0, 0.0),
                    desired_velocity(&intent, yaw, 5.0),
                    1.0 / 60.0,
                );
                let horiz = Vec2::new(v.x, v.z).length();
                assert!((horiz - 5.0).abs() < 1e-4, "yaw={yaw} intent={intent:?}");
                assert_eq!(v.y, -3.0);
            }
        }
    }

    #[test]
    fn test_default_mode_is_assign() {
        assert_eq!(VelocityMode::default(), VelocityMode::Assign);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let intent = MovementIntent { forward: true, right: true, ..default() };
        assert!((input_direction(&intent).length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let intent = MovementIntent { forward: true, backward: true, ..default() };
        assert_eq!(input_direction(&intent), Vec3::ZERO);
        assert_eq!(desired_velocity(&intent, 1.0, 5.0), Vec3::ZERO);
    }

    #[test]
    fn test_yaw_rotation_preserves_unit_length() {
        let locals = [
            Vec3::NEG_Z,
            Vec3::X,
            Vec3::new(1.0, 0.0, 1.0).normalize(),
            Vec3::new(-0.6, 0.0, 0.8),
        ];
        let mut yaw = -10.0_f32;
        while yaw < 10.0 {
            for local in locals {
                let world = rotate_by_yaw(local, yaw);
                assert!((world.length() - 1.0).abs() < 1e-5);
                assert!(world.y.abs() < 1e-6);
            }
            yaw += 0.37;
        }
    }

    #[test]
    fn test_forward_follows_yaw() {
        let intent = MovementIntent { forward: true, ..default() };
        let v = desired_velocity(&intent, 0.0, 1.0);
        assert!((v - Vec3::NEG_Z).length() < 1e-6);

        let v = desired_velocity(&intent, std::f32::consts::FRAC_PI_2, 1.0);
        assert!((v - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_blend_converges_without_overshoot() {
        let target = Vec3::new(5.0, 0.0, 0.0);
        let mut v = Vec3::ZERO;
        let mut last_gap = f32::MAX;
        for _ in 0..200 {
            v = apply_horizontal(VelocityMode::Blend { factor: 0.2 }, v, target, 1.0 / 60.0);
            let gap = (target - v).length();
            assert!(gap <= last_gap);
            assert!(v.x <= target.x + 1e-5);
            last_gap = gap;
        }
        assert!(last_gap < 1e-3);
    }

    #[test]
    fn test_blend_keeps_vertical_velocity() {
        let v = apply_horizontal(
            VelocityMode::Blend { factor: 0.5 },
            Vec3::new(2.0, 7.0, 0.0),
            Vec3::ZERO,
            1.0 / 60.0,
        );
        assert_eq!(v, Vec3::new(1.0, 7.0, 0.0));
    }

    #[test]
    fn test_accelerate_is_rate_limited() {
        let mode = VelocityMode::Accelerate { accel: 30.0, brake: 60.0 };
        let target = Vec3::new(0.0, 0.0, -5.0);

        let v = apply_horizontal(mode, Vec3::ZERO, target, 0.1);
        assert!((v.z + 3.0).abs() < 1e-5);

        let v = apply_horizontal(mode, v, target, 0.1);
        assert_eq!(v.z, -5.0);

        // Braking uses the brake rate
        let v = apply_horizontal(mode, v, Vec3::ZERO, 0.05);
        assert!((v.z + 2.0).abs() < 1e-5);
    }
}
