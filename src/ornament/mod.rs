//! Ornament kinds and their per-kind tables
//!
//! Each kind owns a style (scale range and color rule, used at generation
//! time) and a behavior (rotation and scale rules, used every frame). Both
//! are looked up by the kind's index, never by inspecting the record.

mod kind;
mod style;
mod behavior;

pub use kind::OrnamentKind;
pub use style::{KindStyle, ColorRule, LUXURY_PALETTE, style_for};
pub use behavior::{KindBehavior, MotionContext, behavior_for};
