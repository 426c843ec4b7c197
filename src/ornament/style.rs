use rand::Rng;
use super::OrnamentKind;
use crate::math::Color;

/// Gold, crimson, emerald, champagne
pub const LUXURY_PALETTE: [u32; 4] = [0xD4AF37, 0x8B0000, 0x0B6623, 0xF7E7CE];

/// How a kind picks its color at generation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRule {
    /// Uniform draw from [`LUXURY_PALETTE`]
    Palette,
    /// Single packed `0xRRGGBB` color
    Fixed(u32),
}

/// Generation-time appearance of one kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindStyle {
    pub scale_min: f32,
    pub scale_max: f32,
    pub color: ColorRule,
}

const STYLES: [KindStyle; OrnamentKind::COUNT] = [
    // ball
    KindStyle { scale_min: 0.15, scale_max: 0.30, color: ColorRule::Palette },
    // gift
    KindStyle { scale_min: 0.20, scale_max: 0.35, color: ColorRule::Palette },
    // light
    KindStyle { scale_min: 0.05, scale_max: 0.10, color: ColorRule::Fixed(0xFFF4C2) },
    // bell
    KindStyle { scale_min: 0.15, scale_max: 0.25, color: ColorRule::Fixed(0xFFD700) },
    // star
    KindStyle { scale_min: 0.15, scale_max: 0.25, color: ColorRule::Fixed(0xFFE87C) },
    // candy
    KindStyle { scale_min: 0.12, scale_max: 0.22, color: ColorRule::Palette },
    // snowflake
    KindStyle { scale_min: 0.12, scale_max: 0.20, color: ColorRule::Fixed(0xE0F4FF) },
    // wreath
    KindStyle { scale_min: 0.20, scale_max: 0.30, color: ColorRule::Fixed(0x1E5631) },
];

pub fn style_for(kind: OrnamentKind) -> &'static KindStyle {
    &STYLES[kind.index()]
}

impl KindStyle {
    pub fn sample_scale<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.scale_min..self.scale_max)
    }

    pub fn sample_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        match self.color {
            ColorRule::Palette => {
                let pick = rng.gen_range(0..LUXURY_PALETTE.len());
                Color::from_hex(LUXURY_PALETTE[pick])
            }
            ColorRule::Fixed(hex) => Color::from_hex(hex),
        }
    }
}
