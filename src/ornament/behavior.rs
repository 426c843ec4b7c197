use std::f32::consts::TAU;
use super::OrnamentKind;
use crate::math::Vec3;

/// Per-instance inputs available to the motion rules for one frame
#[derive(Debug, Clone, Copy)]
pub struct MotionContext {
    pub delta_time: f32,
    pub elapsed_time: f32,
    /// Chaos anchor; its coordinates double as a per-instance phase
    pub anchor: Vec3,
    /// Position already advanced for this frame
    pub position: Vec3,
}

type RotateFn = fn(Vec3, &MotionContext) -> Vec3;
type ScaleFn = fn(f32, &MotionContext) -> f32;

/// Frame-time behavior of one kind
#[derive(Clone, Copy)]
pub struct KindBehavior {
    /// Maps the previous Euler rotation to this frame's rotation
    pub rotate: RotateFn,
    /// Maps the base scale to this frame's uniform scale
    pub scale: ScaleFn,
}

impl std::fmt::Debug for KindBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KindBehavior").finish_non_exhaustive()
    }
}

const BEHAVIORS: [KindBehavior; OrnamentKind::COUNT] = [
    KindBehavior { rotate: face_axis, scale: steady },   // ball
    KindBehavior { rotate: tumble, scale: steady },      // gift
    KindBehavior { rotate: face_axis, scale: pulse },    // light
    KindBehavior { rotate: swing, scale: steady },       // bell
    KindBehavior { rotate: turn_slow, scale: twinkle },  // star
    KindBehavior { rotate: turn_fast, scale: steady },   // candy
    KindBehavior { rotate: drift, scale: steady },       // snowflake
    KindBehavior { rotate: sway, scale: steady },        // wreath
];

pub fn behavior_for(kind: OrnamentKind) -> &'static KindBehavior {
    &BEHAVIORS[kind.index()]
}

fn wrap(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

fn tumble(r: Vec3, ctx: &MotionContext) -> Vec3 {
    Vec3::new(
        wrap(r.x + 0.5 * ctx.delta_time),
        wrap(r.y + 0.2 * ctx.delta_time),
        r.z,
    )
}

fn swing(r: Vec3, ctx: &MotionContext) -> Vec3 {
    Vec3::new(r.x, r.y, (ctx.elapsed_time * 2.0 + ctx.anchor.x).sin() * 0.1)
}

fn drift(r: Vec3, ctx: &MotionContext) -> Vec3 {
    Vec3::new(
        wrap(r.x + 0.1 * ctx.delta_time),
        wrap(r.y + 0.3 * ctx.delta_time),
        r.z,
    )
}

fn turn_slow(r: Vec3, ctx: &MotionContext) -> Vec3 {
    Vec3::new(r.x, wrap(r.y + 0.2 * ctx.delta_time), r.z)
}

fn turn_fast(r: Vec3, ctx: &MotionContext) -> Vec3 {
    Vec3::new(r.x, wrap(r.y + 0.8 * ctx.delta_time), r.z)
}

fn sway(r: Vec3, ctx: &MotionContext) -> Vec3 {
    Vec3::new(r.x, r.y, (ctx.elapsed_time * 1.5 + ctx.anchor.y).sin() * 0.05)
}

/// Local +Z points at the trunk axis at the ornament's own height
fn face_axis(r: Vec3, ctx: &MotionContext) -> Vec3 {
    let dx = -ctx.position.x;
    let dz = -ctx.position.z;
    if dx * dx + dz * dz < 1e-12 {
        return r;
    }
    Vec3::new(0.0, dx.atan2(dz), 0.0)
}

fn steady(base: f32, _ctx: &MotionContext) -> f32 {
    base
}

fn pulse(base: f32, ctx: &MotionContext) -> f32 {
    base * (1.0 + (ctx.elapsed_time * 5.0 + ctx.anchor.y).sin() * 0.3)
}

fn twinkle(base: f32, ctx: &MotionContext) -> f32 {
    base * (1.0 + (ctx.elapsed_time * 8.0 + ctx.anchor.x).sin() * 0.2)
}
