use serde::{Deserialize, Serialize};
use crate::math::{Color, Vec3};
use crate::ornament::OrnamentKind;

/// Static data for one ornament, fixed at generation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// Anchor in the dispersed layout
    pub chaos_position: Vec3,
    /// Anchor in the assembled tree layout
    pub target_position: Vec3,
    pub kind: OrnamentKind,
    pub color: Color,
    /// Base uniform scale
    pub scale: f32,
    /// Interpolation rate multiplier
    pub speed: f32,
    /// Initial X and Y rotation, radians in [0, PI)
    pub rotation_seed: (f32, f32),
}

impl InstanceRecord {
    /// Anchor the instance moves toward in the given layout
    pub fn anchor(&self, formed: bool) -> Vec3 {
        if formed {
            self.target_position
        } else {
            self.chaos_position
        }
    }

    pub fn initial_rotation(&self) -> Vec3 {
        Vec3::new(self.rotation_seed.0, self.rotation_seed.1, 0.0)
    }
}
