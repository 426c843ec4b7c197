use super::Vec3;

/// 4x4 matrix for instance transforms (column-major, as instanced attributes expect)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.data[12] = x;
        m.data[13] = y;
        m.data[14] = z;
        m
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.data[0] = x;
        m.data[5] = y;
        m.data[10] = z;
        m
    }

    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, c, s, 0.0,
                0.0, -s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                c, 0.0, -s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                c, s, 0.0, 0.0,
                -s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Compose translation, XYZ Euler rotation and non-uniform scale.
    ///
    /// Equivalent to `T * Rx * Ry * Rz * S`, so scale is applied first and
    /// the Z rotation is the innermost.
    pub fn from_trs(position: Vec3, euler: Vec3, scale: Vec3) -> Self {
        let rotation = Self::rotation_x(euler.x)
            .mul(&Self::rotation_y(euler.y))
            .mul(&Self::rotation_z(euler.z));

        Self::translation(position.x, position.y, position.z)
            .mul(&rotation)
            .mul(&Self::scale(scale.x, scale.y, scale.z))
    }

    /// Matrix multiplication
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                result[row + col * 4] = sum;
            }
        }

        Self { data: result }
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0] * p.x + self.data[4] * p.y + self.data[8] * p.z + self.data[12],
            self.data[1] * p.x + self.data[5] * p.y + self.data[9] * p.z + self.data[13],
            self.data[2] * p.x + self.data[6] * p.y + self.data[10] * p.z + self.data[14],
        )
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}
