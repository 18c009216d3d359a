//! World systems
//!
//! Spawning the current level's static boxes, lighting, and physics setup.

use bevy::light::light_consts::lux;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use shared::{LevelRoot, LevelSurface};

use crate::settings::{Levels, Settings};

/// Sky colour behind the level (0x87ceeb)
const SKY: Color = Color::srgb(0.529, 0.808, 0.922);

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(ClearColor(SKY));

    commands.spawn((
        DirectionalLight {
            illuminance: lux::AMBIENT_DAYLIGHT,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Push the configured gravity into the Rapier context once it exists
pub fn apply_gravity(
    settings: Res<Settings>,
    mut configs: Query<&mut RapierConfiguration, Added<RapierConfiguration>>,
) {
    for mut config in &mut configs {
        config.gravity = Vec3::new(0.0, settings.0.gravity, 0.0);
        info!("Physics gravity set to {}", settings.0.gravity);
    }
}

/// Despawn the previous level and spawn the current one
pub fn rebuild_level(
    mut commands: Commands,
    levels: Res<Levels>,
    roots: Query<(Entity, &LevelRoot)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, root) in &roots {
        debug!("Unloading level {}", root.level + 1);
        commands.entity(entity).despawn();
    }

    let Some(level) = levels.current_level() else {
        warn!("No level at index {}", levels.current);
        return;
    };

    let root = commands
        .spawn((
            LevelRoot {
                level: levels.current,
            },
            Name::new(format!("Level {}", level.name)),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    for (index, level_box) in level.boxes.iter().enumerate() {
        let [w, h, d] = level_box.size;
        let [hx, hy, hz] = level_box.half_extents();
        let [r, g, b] = level_box.srgb();

        commands.spawn((
            LevelSurface { index },
            Mesh3d(meshes.add(Cuboid::new(w, h, d))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(r, g, b),
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::from_translation(Vec3::from_array(level_box.center)),
            RigidBody::Fixed,
            Collider::cuboid(hx, hy, hz),
            ChildOf(root),
        ));
    }

    info!(
        "Spawned level {} '{}' ({} boxes)",
        levels.current + 1,
        level.name,
        level.boxes.len()
    );
}
