//! Pointer lock
//!
//! Click to lock the cursor and play; Escape or losing window focus frees it.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused};

use crate::states::GameState;

/// Left click while paused enters play
pub fn grab_cursor(
    mouse_button: Res<ButtonInput<MouseButton>>,
    game_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if game_state.get() == &GameState::Paused && mouse_button.just_pressed(MouseButton::Left) {
        next_state.set(GameState::Playing);
    }
}

/// Escape or focus loss pauses
pub fn release_cursor(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut focus_events: MessageReader<WindowFocused>,
    game_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let lost_focus = focus_events.read().any(|event| !event.focused);

    if game_state.get() == &GameState::Playing
        && (keyboard.just_pressed(KeyCode::Escape) || lost_focus)
    {
        next_state.set(GameState::Paused);
    }
}

pub fn lock_cursor(
    windows: Query<Entity, With<PrimaryWindow>>,
    mut cursor_opts: Query<&mut CursorOptions>,
) {
    set_cursor(&windows, &mut cursor_opts, CursorGrabMode::Locked, false);
    info!("Pointer locked");
}

pub fn unlock_cursor(
    windows: Query<Entity, With<PrimaryWindow>>,
    mut cursor_opts: Query<&mut CursorOptions>,
) {
    set_cursor(&windows, &mut cursor_opts, CursorGrabMode::None, true);
    info!("Pointer released (click to play)");
}

fn set_cursor(
    windows: &Query<Entity, With<PrimaryWindow>>,
    cursor_opts: &mut Query<&mut CursorOptions>,
    grab_mode: CursorGrabMode,
    visible: bool,
) {
    let Ok(window_entity) = windows.single() else {
        return;
    };

    if let Ok(mut cursor) = cursor_opts.get_mut(window_entity) {
        cursor.grab_mode = grab_mode;
        cursor.visible = visible;
    }
}
