//! Instance buffers shared with the external renderer
//!
//! Each ornament kind is drawn in one instanced call; this module owns the
//! per-kind transform and color buffers and the flag telling the renderer
//! when to re-upload them.

pub mod transform;
pub mod batch;

pub use transform::Transform;
pub use batch::{RenderBatch, BatchSet, BatchError, MATRIX_STRIDE, COLOR_STRIDE};
