use serde::{Deserialize, Serialize};
use super::Mode;
use crate::ornament::{behavior_for, MotionContext};
use crate::population::{InstanceRecord, Population};
use crate::render::{BatchError, BatchSet, Transform};

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::prelude::*;

/// Tuning for the settled wobble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorParams {
    /// Distance to the tree anchor below which an ornament counts as settled
    pub settle_distance: f32,
    /// Vertical nudge per frame while settled
    pub wobble_amplitude: f32,
    /// Angular frequency of the wobble (rad/s)
    pub wobble_frequency: f32,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            settle_distance: 0.5,
            wobble_amplitude: 0.002,
            wobble_frequency: 2.0,
        }
    }
}

/// Host inputs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub delta_time: f32,
    pub elapsed_time: f32,
    pub mode: Mode,
}

/// Summary of one animator pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Instances written this frame
    pub updated: usize,
    /// Instances within the settle distance of their tree anchor (formed mode only)
    pub settled: usize,
}

/// Advances every ornament's transform by one frame
#[derive(Debug, Clone, Default)]
pub struct InstanceAnimator {
    pub params: AnimatorParams,
}

impl InstanceAnimator {
    pub fn new(params: AnimatorParams) -> Self {
        Self { params }
    }

    /// Run one frame over every group, reading and writing `batches`.
    ///
    /// Each instance only touches its own slot, so the order of the pass
    /// does not affect the result. With the `parallel` feature the slots of
    /// each group are stepped on the rayon pool.
    pub fn update(
        &self,
        population: &Population,
        batches: &mut BatchSet,
        input: FrameInput,
    ) -> Result<FrameStats, BatchError> {
        batches.validate(population)?;

        let mut stats = FrameStats::default();
        for group in population.groups() {
            if group.is_empty() {
                continue;
            }

            let batch = batches.batch_mut(group.kind());
            let stepped = self.step_group(group.records(), batch.transforms(), &input);
            for (slot, (next, settled)) in stepped.into_iter().enumerate() {
                batch.set_transform(slot, next)?;
                if settled {
                    stats.settled += 1;
                }
            }

            batch.mark_dirty();
            stats.updated += group.len();
        }

        Ok(stats)
    }

    /// Step every slot of one group in order
    pub fn step_group_serial(
        &self,
        records: &[InstanceRecord],
        transforms: &[Transform],
        input: &FrameInput,
    ) -> Vec<(Transform, bool)> {
        records
            .iter()
            .zip(transforms)
            .map(|(record, current)| self.step(record, *current, input))
            .collect()
    }

    #[cfg(not(all(feature = "parallel", not(target_arch = "wasm32"))))]
    fn step_group(&self, records: &[InstanceRecord], transforms: &[Transform], input: &FrameInput) -> Vec<(Transform, bool)> {
        self.step_group_serial(records, transforms, input)
    }

    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    fn step_group(&self, records: &[InstanceRecord], transforms: &[Transform], input: &FrameInput) -> Vec<(Transform, bool)> {
        records
            .par_iter()
            .zip(transforms.par_iter())
            .map(|(record, current)| self.step(record, *current, input))
            .collect()
    }

    /// New transform for one instance, and whether it is settled on the tree
    pub fn step(&self, record: &InstanceRecord, current: Transform, input: &FrameInput) -> (Transform, bool) {
        let formed = input.mode.is_formed();
        let destination = record.anchor(formed);

        // Factor is deliberately unclamped; speed * dt > 1 overshoots
        let mut position = current
            .position
            .lerp(&destination, input.delta_time * record.speed);

        let settled = formed && position.distance(&record.target_position) < self.params.settle_distance;
        if settled {
            let phase = input.elapsed_time * self.params.wobble_frequency + record.chaos_position.x;
            position.y += phase.sin() * self.params.wobble_amplitude;
        }

        let ctx = MotionContext {
            delta_time: input.delta_time,
            elapsed_time: input.elapsed_time,
            anchor: record.chaos_position,
            position,
        };
        let behavior = behavior_for(record.kind);
        let rotation = (behavior.rotate)(current.rotation, &ctx);
        let scale = (behavior.scale)(record.scale, &ctx);

        (Transform::new(position, rotation, scale), settled)
    }
}
