//! Ground tests
//!
//! The physics world is queried by the client; this module only decides
//! whether the gathered evidence counts as "grounded".

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw ground evidence for one tick
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GroundSample {
    /// Hit distance of a downward ray from the body centre (`None` = miss)
    pub ray_distance: Option<f32>,
    /// Contact normals oriented from the touching surface into the player
    pub contact_normals: Vec<Vec3>,
    /// Current vertical velocity of the body
    pub vertical_speed: f32,
}

/// Which evidence decides whether the player stands on something
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum GroundTest {
    /// Downward ray hit closer than `max_distance`
    RayCast { max_distance: f32 },
    /// Any contact normal with an upward component above `min_up`
    ContactNormal { min_up: f32 },
    /// Latch set by a collision-start with level geometry, cleared by a jump
    CollisionLatch,
    /// Vertical speed within `tolerance` of zero
    VerticalSpeed { tolerance: f32 },
}

impl Default for GroundTest {
    fn default() -> Self {
        GroundTest::RayCast { max_distance: 1.05 }
    }
}

impl GroundTest {
    pub fn is_grounded(&self, sample: &GroundSample, latched: bool) -> bool {
        match *self {
            GroundTest::RayCast { max_distance } => sample
                .ray_distance
                .is_some_and(|distance| distance < max_distance),
            GroundTest::ContactNormal { min_up } => {
                sample.contact_normals.iter().any(|n| n.y > min_up)
            }
            GroundTest::CollisionLatch => latched,
            GroundTest::VerticalSpeed { tolerance } => sample.vertical_speed.abs() < tolerance,
        }
    }

    /// Whether the client needs to run a ray cast for this test
    pub fn wants_ray(&self) -> bool {
        matches!(self, GroundTest::RayCast { .. })
    }

    /// Whether the client needs to collect contact normals for this test
    pub fn wants_contacts(&self) -> bool {
        matches!(self, GroundTest::ContactNormal { .. })
    }

    /// Longest ray worth casting for this test
    pub fn ray_length(&self) -> f32 {
        match *self {
            GroundTest::RayCast { max_distance } => max_distance,
            _ => 0.0,
        }
    }
}
