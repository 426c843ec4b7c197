use std::ops::{Add, Sub, Mul, Neg};
use serde::{Serialize, Deserialize};

/// 3D vector for positions, Euler angles, and colors
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Linear RGB color, each channel in [0, 1]
pub type Color = Vec3;

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same value on all three axes
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            x: ((hex >> 16) & 0xff) as f32 / 255.0,
            y: ((hex >> 8) & 0xff) as f32 / 255.0,
            z: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Point on a sphere with a vertical polar axis.
    ///
    /// `phi` is the inclination from +Y, `theta` the azimuth around Y
    /// measured from +Z toward +X.
    pub fn from_spherical(radius: f32, phi: f32, theta: f32) -> Self {
        let sin_phi = phi.sin();
        Self {
            x: radius * sin_phi * theta.sin(),
            y: radius * phi.cos(),
            z: radius * sin_phi * theta.cos(),
        }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Linear interpolation; `t` is not clamped, so `t > 1` overshoots `other`
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    pub fn scale(&self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Convert to array for buffer upload
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Distance to another point
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
