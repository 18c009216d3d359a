//! Level data: static axis-aligned boxes for the ground and platforms.
//!
//! Levels are loaded from RON. The three stock levels are compiled in and used
//! whenever no level file is available.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::player::SPAWN_POSITION;

/// Current level file version
pub const LEVEL_SET_VERSION: u32 = 1;

const GRASS: u32 = 0x228B22;
const BLUE: u32 = 0x0000ff;
const RED: u32 = 0xff0000;
const MAGENTA: u32 = 0xff00ff;
const YELLOW: u32 = 0xffff00;
const ORANGE: u32 = 0xffa500;

/// One static box. `center` is the box centre, `size` the full width/height/depth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LevelBox {
    pub center: [f32; 3],
    pub size: [f32; 3],
    /// 0xRRGGBB
    pub color: u32,
}

impl LevelBox {
    pub const fn new(center: [f32; 3], size: [f32; 3], color: u32) -> Self {
        Self { center, size, color }
    }

    pub fn half_extents(&self) -> [f32; 3] {
        [self.size[0] * 0.5, self.size[1] * 0.5, self.size[2] * 0.5]
    }

    /// sRGB components in 0..=1
    pub fn srgb(&self) -> [f32; 3] {
        let r = (self.color >> 16) & 0xff;
        let g = (self.color >> 8) & 0xff;
        let b = self.color & 0xff;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Level {
    pub name: String,
    #[serde(default = "default_spawn")]
    pub spawn: [f32; 3],
    pub boxes: Vec<LevelBox>,
}

fn default_spawn() -> [f32; 3] {
    SPAWN_POSITION
}

impl Level {
    fn validate(&self) -> Result<(), String> {
        if self.boxes.is_empty() {
            return Err(format!("level '{}' has no boxes", self.name));
        }
        if !self.spawn.iter().all(|v| v.is_finite()) {
            return Err(format!("level '{}' has a non-finite spawn", self.name));
        }
        for (i, b) in self.boxes.iter().enumerate() {
            if !b.center.iter().chain(b.size.iter()).all(|v| v.is_finite()) {
                return Err(format!("level '{}' box {i} has non-finite values", self.name));
            }
            if b.size.iter().any(|&s| s <= 0.0) {
                return Err(format!(
                    "level '{}' box {i} has a non-positive size {:?}",
                    self.name, b.size
                ));
            }
            if b.color > 0xff_ffff {
                return Err(format!(
                    "level '{}' box {i} colour {:#x} is not 0xRRGGBB",
                    self.name, b.color
                ));
            }
        }
        Ok(())
    }
}

/// Versioned, ordered list of levels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelSet {
    pub version: u32,
    pub levels: Vec<Level>,
}

impl LevelSet {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.version != LEVEL_SET_VERSION {
            return Err(format!(
                "Unsupported LevelSet version {} (expected {LEVEL_SET_VERSION})",
                self.version
            ));
        }
        if self.levels.is_empty() {
            return Err("level set is empty".to_string());
        }
        self.levels.iter().try_for_each(Level::validate)
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        builtin_levels()
    }
}

/// The stock levels: a 50x50 ground slab with progressively smaller, higher platforms.
pub fn builtin_levels() -> LevelSet {
    let ground = LevelBox::new([0.0, 0.0, 0.0], [50.0, 1.0, 50.0], GRASS);

    LevelSet {
        version: LEVEL_SET_VERSION,
        levels: vec![
            Level {
                name: "Beginner".to_string(),
                spawn: SPAWN_POSITION,
                boxes: vec![
                    ground,
                    LevelBox::new([5.0, 2.0, 0.0], [4.0, 1.0, 4.0], BLUE),
                    LevelBox::new([-5.0, 4.0, -5.0], [4.0, 1.0, 4.0], BLUE),
                    LevelBox::new([0.0, 6.0, 5.0], [4.0, 1.0, 4.0], BLUE),
                ],
            },
            Level {
                name: "Intermediate".to_string(),
                spawn: SPAWN_POSITION,
                boxes: vec![
                    ground,
                    LevelBox::new([6.0, 2.0, 0.0], [3.0, 1.0, 3.0], RED),
                    LevelBox::new([10.0, 4.0, -3.0], [4.0, 1.0, 4.0], MAGENTA),
                    LevelBox::new([-8.0, 6.0, 2.0], [2.0, 1.0, 2.0], YELLOW),
                    LevelBox::new([0.0, 8.0, 10.0], [4.0, 1.0, 4.0], BLUE),
                ],
            },
            Level {
                name: "Advanced".to_string(),
                spawn: SPAWN_POSITION,
                boxes: vec![
                    ground,
                    LevelBox::new([-5.0, 2.0, 5.0], [2.0, 1.0, 2.0], RED),
                    LevelBox::new([5.0, 3.0, 10.0], [3.0, 1.0, 3.0], ORANGE),
                    LevelBox::new([-10.0, 5.0, 15.0], [4.0, 1.0, 4.0], YELLOW),
                    LevelBox::new([0.0, 7.0, 20.0], [4.0, 1.0, 4.0], BLUE),
                    LevelBox::new([10.0, 9.0, 25.0], [3.0, 1.0, 3.0], MAGENTA),
                ],
            },
        ],
    }
}

/// Parse and validate a level set from RON text.
pub fn load_levels_from_str(text: &str) -> Result<LevelSet, String> {
    let set: LevelSet = ron::from_str(text).map_err(|e| format!("ron parse failed: {e}"))?;
    set.validate()?;
    Ok(set)
}

/// Load a level set from a file path (RON).
pub fn load_levels_from_file(path: impl AsRef<Path>) -> Result<LevelSet, String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| format!("failed to read {path:?}: {e}"))?;
    load_levels_from_str(&text).map_err(|e| format!("{path:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_validate() {
        let set = builtin_levels();
        assert!(set.validate().is_ok());
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0).map(|l| l.boxes.len()), Some(4));
        assert_eq!(set.get(2).map(|l| l.name.as_str()), Some("Advanced"));
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_spawn_is_above_ground() {
        for level in builtin_levels().levels {
            let ground = level.boxes[0];
            let ground_top = ground.center[1] + ground.half_extents()[1];
            assert!(level.spawn[1] > ground_top + crate::player::PLAYER_HALF_HEIGHT);
        }
    }

    #[test]
    fn test_box_geometry_helpers() {
        let b = LevelBox::new([1.0, 2.0, 3.0], [4.0, 1.0, 2.0], 0x228B22);
        assert_eq!(b.half_extents(), [2.0, 0.5, 1.0]);

        let [r, g, blue] = b.srgb();
        assert!((r - 0x22 as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x8B as f32 / 255.0).abs() < 1e-6);
        assert!((blue - 0x22 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_from_ron_with_default_spawn() {
        let text = r#"
            (
                version: 1,
                levels: [
                    (
                        name: "Tiny",
                        boxes: [
                            (center: (0.0, 0.0, 0.0), size: (10.0, 1.0, 10.0), color: 0x808080),
                        ],
                    ),
                ],
            )
        "#;
        let set = load_levels_from_str(text).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.levels[0].spawn, SPAWN_POSITION);
        assert_eq!(set.levels[0].boxes[0].color, 0x808080);
    }

    #[test]
    fn test_round_trip_through_ron() {
        let text = ron::to_string(&builtin_levels()).unwrap();
        assert_eq!(load_levels_from_str(&text).unwrap(), builtin_levels());
    }

    #[test]
    fn test_rejects_invalid_sets() {
        let mut set = builtin_levels();
        set.version = 2;
        assert!(set.validate().unwrap_err().contains("version"));

        let empty = LevelSet { version: 1, levels: Vec::new() };
        assert!(empty.validate().is_err());

        let mut set = builtin_levels();
        set.levels[1].boxes[2].size[1] = 0.0;
        assert!(set.validate().unwrap_err().contains("Intermediate"));

        let mut set = builtin_levels();
        set.levels[0].boxes.clear();
        assert!(set.validate().is_err());

        let mut set = builtin_levels();
        set.levels[2].spawn[0] = f32::NAN;
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_shipped_level_file_matches_builtin() {
        let set = load_levels_from_str(include_str!("../../assets/levels.ron")).unwrap();
        assert_eq!(set, builtin_levels());
    }

    #[test]
    fn test_rejects_malformed_ron() {
        assert!(load_levels_from_str("(version: 1, levels: [(name: 3)])").is_err());
    }
}
