//! Config and level files
//!
//! Both files are optional: a missing or broken file is logged and replaced
//! by compiled-in defaults so the demo always starts.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use shared::{builtin_levels, load_config_from_file, load_levels_from_file, ControllerConfig, Level, LevelSet};

pub const CONFIG_FILE: &str = "controller.ron";
pub const LEVELS_FILE: &str = "levels.ron";

/// Controller tuning in effect
#[derive(Resource, Clone, Debug)]
pub struct Settings(pub ControllerConfig);

/// Loaded levels and the one currently spawned
#[derive(Resource, Clone, Debug)]
pub struct Levels {
    pub set: LevelSet,
    pub current: usize,
}

impl Levels {
    pub fn new(set: LevelSet, current: usize) -> Self {
        Self { set, current }
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.set.get(self.current)
    }

    /// Spawn point of the current level
    pub fn spawn_point(&self) -> Vec3 {
        self.current_level()
            .map(|level| Vec3::from_array(level.spawn))
            .unwrap_or_else(|| Vec3::from_array(shared::SPAWN_POSITION))
    }
}

/// Get the asset path - for bundled macOS apps, use path relative to executable
pub fn asset_dir() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let bundled_assets = exe_dir.join("assets");
            if bundled_assets.exists() {
                return bundled_assets;
            }
        }
    }
    // Fall back to default "assets" folder (for development)
    PathBuf::from("assets")
}

/// Load controller config and levels, falling back to defaults on any error
pub fn load_settings(asset_dir: &Path) -> (ControllerConfig, LevelSet) {
    let config = load_config_from_file(asset_dir.join(CONFIG_FILE)).unwrap_or_else(|e| {
        warn!("Using default controller config: {e}");
        ControllerConfig::default()
    });

    let levels = load_levels_from_file(asset_dir.join(LEVELS_FILE)).unwrap_or_else(|e| {
        warn!("Using built-in levels: {e}");
        builtin_levels()
    });

    if config.start_level >= levels.len() {
        warn!(
            "start_level {} out of range ({} levels); starting at the last level",
            config.start_level,
            levels.len()
        );
    }

    (config, levels)
}
