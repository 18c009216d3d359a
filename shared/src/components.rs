//! ECS components shared by the scene and the controller

use bevy::prelude::*;

/// Marker component for the player body
#[derive(Component, Clone, Debug, Default)]
pub struct Player;

/// Root entity for everything spawned for the current level
#[derive(Component, Clone, Debug)]
pub struct LevelRoot {
    pub level: usize,
}

/// Static level geometry the player can stand on
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelSurface {
    /// Index of the box within its level
    pub index: usize,
}
