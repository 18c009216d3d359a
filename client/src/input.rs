//! Player input handling

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use shared::{CameraMode, LookAngles, MovementIntent};

use crate::settings::{Levels, Settings};
use crate::states::GameState;

const LEVEL_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Client-side input state, written by the input systems and read by the controller
#[derive(Resource, Debug, Default)]
pub struct InputState {
    /// Held movement/jump keys (cleared while paused)
    pub intent: MovementIntent,
    /// Mouse-controlled yaw/pitch
    pub look: LookAngles,
    /// `R` pressed this frame
    pub respawn: bool,
    /// Camera view mode (toggle with P)
    pub camera_mode: CameraMode,
}

impl InputState {
    pub fn new(camera_mode: CameraMode) -> Self {
        Self {
            camera_mode,
            ..default()
        }
    }

    /// Read the held movement keys
    pub fn read_keys(keyboard: &ButtonInput<KeyCode>) -> MovementIntent {
        MovementIntent {
            forward: keyboard.pressed(KeyCode::KeyW),
            backward: keyboard.pressed(KeyCode::KeyS),
            left: keyboard.pressed(KeyCode::KeyA),
            right: keyboard.pressed(KeyCode::KeyD),
            jump: keyboard.pressed(KeyCode::Space),
        }
    }
}

/// Level index for a number key pressed this frame (`1` → 0)
pub fn level_key_pressed(keyboard: &ButtonInput<KeyCode>) -> Option<usize> {
    LEVEL_KEYS.iter().position(|key| keyboard.just_pressed(*key))
}

/// Handle keyboard input for movement, respawn, camera mode and level selection
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    game_state: Res<State<GameState>>,
    mut input_state: ResMut<InputState>,
    mut levels: ResMut<Levels>,
) {
    if game_state.get() != &GameState::Playing {
        input_state.intent = MovementIntent::default();
        input_state.respawn = false;
        return;
    }

    input_state.intent = InputState::read_keys(&keyboard);
    input_state.respawn = keyboard.just_pressed(KeyCode::KeyR);

    if keyboard.just_pressed(KeyCode::KeyP) {
        input_state.camera_mode = input_state.camera_mode.toggled();
        info!("Camera mode: {:?}", input_state.camera_mode);
    }

    if let Some(index) = level_key_pressed(&keyboard) {
        if index >= levels.set.len() {
            debug!("No level {} (have {})", index + 1, levels.set.len());
        } else if index != levels.current {
            // Mutating `Levels` triggers the level rebuild
            levels.current = index;
        }
    }
}

/// Handle mouse input for looking around (pointer-lock gated)
pub fn handle_mouse_input(
    mut mouse_motion: MessageReader<MouseMotion>,
    game_state: Res<State<GameState>>,
    settings: Res<Settings>,
    mut input_state: ResMut<InputState>,
) {
    let mut delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        delta += motion.delta;
    }

    if delta == Vec2::ZERO || game_state.get() != &GameState::Playing {
        return;
    }

    input_state
        .look
        .apply_mouse_delta(delta, settings.0.mouse_sensitivity, settings.0.pitch_limit);
}
