use log::error;
use super::Transform;
use crate::math::Color;
use crate::ornament::OrnamentKind;
use crate::population::{Population, TypeGroup};

/// Floats per instance in [`RenderBatch::matrix_data`]
pub const MATRIX_STRIDE: usize = 16;
/// Floats per instance in [`RenderBatch::color_data`]
pub const COLOR_STRIDE: usize = 3;

/// Misconfigured batch access; never expected once batches are rebuilt
/// together with their population
#[derive(Debug, Clone, PartialEq)]
pub enum BatchError {
    IndexOutOfRange { kind: OrnamentKind, index: usize, len: usize },
    SizeMismatch { kind: OrnamentKind, batch: usize, group: usize },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::IndexOutOfRange { kind, index, len } => {
                write!(f, "{} batch slot {} out of range (len {})", kind, index, len)
            }
            BatchError::SizeMismatch { kind, batch, group } => {
                write!(f, "{} batch holds {} slots but its group has {} records", kind, batch, group)
            }
        }
    }
}

impl std::error::Error for BatchError {}

/// Per-kind instance buffers handed to the renderer.
///
/// The transform buffer is the only state carried between frames.
#[derive(Debug, Clone)]
pub struct RenderBatch {
    kind: OrnamentKind,
    transforms: Vec<Transform>,
    colors: Vec<Color>,
    dirty: bool,
}

impl RenderBatch {
    pub fn new(kind: OrnamentKind, len: usize) -> Self {
        Self {
            kind,
            transforms: vec![Transform::default(); len],
            colors: vec![Color::ONE; len],
            dirty: false,
        }
    }

    /// Batch sized to `group`, colored once and posed at the chaos anchors
    pub fn for_group(group: &TypeGroup) -> Self {
        let mut batch = Self::new(group.kind(), group.len());
        for (slot, record) in group.iter().enumerate() {
            batch.colors[slot] = record.color;
            batch.transforms[slot] = Transform::new(
                record.chaos_position,
                record.initial_rotation(),
                record.scale,
            );
        }
        if !batch.is_empty() {
            batch.dirty = true;
        }
        batch
    }

    pub fn kind(&self) -> OrnamentKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), BatchError> {
        if index < self.len() {
            Ok(())
        } else {
            let err = BatchError::IndexOutOfRange { kind: self.kind, index, len: self.len() };
            error!("{}", err);
            Err(err)
        }
    }

    pub fn set_color(&mut self, index: usize, color: Color) -> Result<(), BatchError> {
        self.check(index)?;
        self.colors[index] = color;
        Ok(())
    }

    pub fn set_transform(&mut self, index: usize, transform: Transform) -> Result<(), BatchError> {
        self.check(index)?;
        self.transforms[index] = transform;
        Ok(())
    }

    pub fn transform(&self, index: usize) -> Option<&Transform> {
        self.transforms.get(index)
    }

    pub fn color(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag; the renderer re-uploads when this is true
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Instance matrices for GPU upload.
    /// Format: 16 floats per instance, column-major
    pub fn matrix_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.len() * MATRIX_STRIDE);
        for t in &self.transforms {
            data.extend_from_slice(t.to_matrix().as_slice());
        }
        data
    }

    /// Instance colors for GPU upload.
    /// Format: rgb(3) floats per instance
    pub fn color_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.len() * COLOR_STRIDE);
        for c in &self.colors {
            data.extend_from_slice(&c.to_array());
        }
        data
    }
}

/// One batch per kind, in batch order
#[derive(Debug, Clone)]
pub struct BatchSet {
    batches: Vec<RenderBatch>,
}

impl Default for BatchSet {
    fn default() -> Self {
        Self {
            batches: OrnamentKind::ALL.iter().map(|k| RenderBatch::new(*k, 0)).collect(),
        }
    }
}

impl BatchSet {
    pub fn for_population(population: &Population) -> Self {
        Self {
            batches: population.groups().iter().map(RenderBatch::for_group).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&RenderBatch> {
        self.batches.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RenderBatch> {
        self.batches.get_mut(index)
    }

    pub fn batch(&self, kind: OrnamentKind) -> &RenderBatch {
        &self.batches[kind.index()]
    }

    pub fn batch_mut(&mut self, kind: OrnamentKind) -> &mut RenderBatch {
        &mut self.batches[kind.index()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderBatch> {
        self.batches.iter()
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Check every batch is sized to its group
    pub fn validate(&self, population: &Population) -> Result<(), BatchError> {
        for group in population.groups() {
            let batch = self.batch(group.kind());
            if batch.len() != group.len() {
                let err = BatchError::SizeMismatch {
                    kind: group.kind(),
                    batch: batch.len(),
                    group: group.len(),
                };
                error!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }
}
