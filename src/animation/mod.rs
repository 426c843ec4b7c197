//! Per-frame ornament animation
//!
//! Moves every ornament toward the anchor of the current layout and applies
//! its kind's rotation and scale rules, writing the result into the render
//! batches.

mod mode;
mod clock;
mod animator;

pub use mode::Mode;
pub use clock::FrameClock;
pub use animator::{InstanceAnimator, AnimatorParams, FrameInput, FrameStats};
