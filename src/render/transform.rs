use crate::math::{Mat4, Vec3};

/// Position, Euler rotation and uniform scale of one rendered ornament
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Intrinsic XYZ Euler angles in radians
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self { position, rotation, scale }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_trs(self.position, self.rotation, Vec3::splat(self.scale))
    }
}
