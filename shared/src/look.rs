//! Mouse-look angles
//!
//! Yaw accumulates without bound; pitch is clamped so the view never flips
//! over the vertical.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Default pitch clamp, just short of straight up/down
pub const DEFAULT_PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Horizontal (yaw) and vertical (pitch) look rotation in radians
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Accumulate a pointer delta (pixels) into yaw/pitch.
    ///
    /// Moving the mouse right turns right (yaw decreases, matching Bevy's
    /// counter-clockwise Y rotation); moving it down looks down.
    pub fn apply_mouse_delta(&mut self, delta: Vec2, sensitivity: f32, pitch_limit: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch -= delta.y * sensitivity;
        let limit = pitch_limit.abs();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Camera rotation for these angles (no roll)
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

/// Forward direction on the XZ plane for a yaw.
/// In Bevy: +X is right, +Y is up, -Z is forward.
#[inline]
pub fn flat_forward(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
}

/// Right direction on the XZ plane for a yaw.
#[inline]
pub fn flat_right(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_clamped_after_huge_deltas() {
        let mut look = LookAngles::default();

        look.apply_mouse_delta(Vec2::new(0.0, -1.0e6), 0.002, DEFAULT_PITCH_LIMIT);
        assert!(look.pitch <= DEFAULT_PITCH_LIMIT);
        assert!((look.pitch - DEFAULT_PITCH_LIMIT).abs() < 1e-6);

        look.apply_mouse_delta(Vec2::new(0.0, 1.0e9), 0.002, DEFAULT_PITCH_LIMIT);
        assert!(look.pitch >= -DEFAULT_PITCH_LIMIT);
        assert!((look.pitch + DEFAULT_PITCH_LIMIT).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_clamp_repeated_small_deltas() {
        let mut look = LookAngles::default();
        for _ in 0..10_000 {
            look.apply_mouse_delta(Vec2::new(3.0, 7.0), 0.01, 1.0);
            assert!(look.pitch.abs() <= 1.0);
        }
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut look = LookAngles::default();
        look.apply_mouse_delta(Vec2::new(-10_000.0, 0.0), 0.002, DEFAULT_PITCH_LIMIT);
        assert!((look.yaw - 20.0).abs() < 1e-3);
        assert_eq!(look.pitch, 0.0);
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut look = LookAngles::default();
        look.apply_mouse_delta(Vec2::new(100.0, 0.0), 0.01, DEFAULT_PITCH_LIMIT);
        // Turning right from -Z swings forward toward +X
        assert!(flat_forward(look.yaw).x > 0.0);
    }

    #[test]
    fn test_flat_basis_matches_rotation() {
        for yaw in [0.0_f32, 0.3, 1.7, -2.5, 12.0] {
            let rot = LookAngles::new(yaw, 0.0).rotation();
            assert!((rot * Vec3::NEG_Z - flat_forward(yaw)).length() < 1e-5);
            assert!((rot * Vec3::X - flat_right(yaw)).length() < 1e-5);
        }
    }
}
