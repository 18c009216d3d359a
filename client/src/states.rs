//! Game state machine

use bevy::prelude::*;

/// Pointer-lock gating: mouse look and movement only apply while `Playing`
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Cursor free; click the window to play
    #[default]
    Paused,
    /// Cursor locked to the window
    Playing,
}
