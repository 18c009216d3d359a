//! Player-related constants and types

/// Player movement speed (units per second)
pub const PLAYER_SPEED: f32 = 5.0;

/// Upward speed set on the tick a jump fires (units per second)
pub const JUMP_VELOCITY: f32 = 7.0;

/// Distance from the body centre to the bottom of the capsule
pub const PLAYER_HALF_HEIGHT: f32 = 1.0;

/// Player radius (for capsule)
pub const PLAYER_RADIUS: f32 = 0.5;

/// Mouse sensitivity for look (radians per pixel)
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Gravity in m/s^2 (negative Y)
pub const GRAVITY: f32 = -9.82;

/// Longest simulated step per frame; slower frames run the world in slow motion
pub const PHYSICS_MAX_DT: f32 = 1.0 / 60.0;

/// Players that fall below this height are put back at the level spawn
pub const KILL_PLANE_Y: f32 = -20.0;

/// Spawn position used when a level does not name one
pub const SPAWN_POSITION: [f32; 3] = [0.0, 3.0, 0.0];
