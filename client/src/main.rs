//! Skyhop - first-person platform hopping demo
//!
//! Bevy draws the scene, Rapier owns the player body; the controller from
//! `shared` turns keys and mouse motion into body velocity each frame.

mod camera;
mod input;
mod settings;
mod states;
mod systems;

use bevy::prelude::*;
use bevy::transform::TransformSystems;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;
use states::GameState;

/// Ordering for the per-frame controller pipeline
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Keyboard/mouse into `InputState`
    Input,
    /// Physics queries into `GroundProbe`
    Ground,
    /// Controller step writes body velocity
    Move,
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Skyhop".to_string(),
            resolution: WindowResolution::new(1280, 720),
            ..default()
        }),
        ..default()
    }));

    // After DefaultPlugins so load warnings reach the log
    let asset_dir = settings::asset_dir();
    let (config, levels) = settings::load_settings(&asset_dir);

    // Rapier steps once per frame, capped at PHYSICS_MAX_DT with 3 substeps
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default());
    app.insert_resource(TimestepMode::Variable {
        max_dt: shared::PHYSICS_MAX_DT,
        time_scale: 1.0,
        substeps: 3,
    });
    if config.debug_render {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }

    // Pointer-lock state machine
    app.init_state::<GameState>();

    let start_level = config.start_level.min(levels.len().saturating_sub(1));
    app.insert_resource(input::InputState::new(config.camera.mode));
    app.insert_resource(settings::Levels::new(levels, start_level));
    app.insert_resource(settings::Settings(config));

    app.configure_sets(
        Update,
        (ControllerSet::Input, ControllerSet::Ground, ControllerSet::Move).chain(),
    );

    app.add_systems(Startup, (camera::setup_camera, systems::setup_lighting));

    app.add_systems(
        Update,
        (
            systems::apply_gravity,
            systems::grab_cursor,
            systems::release_cursor,
            (systems::rebuild_level, systems::place_player)
                .chain()
                .run_if(resource_changed::<settings::Levels>)
                .before(ControllerSet::Input),
        ),
    );
    app.add_systems(OnEnter(GameState::Playing), systems::lock_cursor);
    app.add_systems(OnEnter(GameState::Paused), systems::unlock_cursor);

    app.add_systems(
        Update,
        (
            (input::handle_keyboard_input, input::handle_mouse_input).in_set(ControllerSet::Input),
            (systems::sample_ground, systems::latch_ground_collisions).in_set(ControllerSet::Ground),
            (systems::respawn_players, systems::apply_controller)
                .chain()
                .in_set(ControllerSet::Move),
        ),
    );

    // Follow the body after Rapier has written back this frame's pose
    app.add_systems(
        PostUpdate,
        camera::update_camera
            .after(PhysicsSet::Writeback)
            .before(TransformSystems::Propagate),
    );

    info!("Starting Skyhop from assets at {:?}", asset_dir);
    app.run();
}
