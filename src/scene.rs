//! Owns the population, its render batches and the frame loop state

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use crate::animation::{FrameClock, FrameInput, FrameStats, InstanceAnimator, Mode};
use crate::config::SceneConfig;
use crate::placement::PlacementGenerator;
use crate::population::Population;
use crate::render::BatchSet;

/// A complete ornament scene driven one frame at a time by the host
pub struct OrnamentScene {
    generator: PlacementGenerator,
    animator: InstanceAnimator,
    rng: SmallRng,
    count: usize,
    population: Population,
    batches: BatchSet,
    clock: FrameClock,
    mode: Mode,
}

impl OrnamentScene {
    /// Build and populate a scene; rejects configs that would fail sampling
    pub fn new(config: SceneConfig) -> Result<Self, String> {
        if let Err(e) = config.validate() {
            warn!("rejected scene config: {}", e);
            return Err(e);
        }

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut scene = Self {
            generator: PlacementGenerator::new(config.placement),
            animator: InstanceAnimator::new(config.animation),
            rng,
            count: config.count,
            population: Population::default(),
            batches: BatchSet::default(),
            clock: FrameClock::new(),
            mode: config.mode,
        };
        scene.regenerate();
        Ok(scene)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        Self::new(SceneConfig::from_yaml(yaml)?)
    }

    /// Replace the whole population with fresh draws of the current size
    pub fn regenerate(&mut self) {
        self.population = self.generator.generate(self.count, &mut self.rng);
        self.batches = BatchSet::for_population(&self.population);

        let summary: Vec<String> = self
            .population
            .groups()
            .iter()
            .map(|g| format!("{}={}", g.kind(), g.len()))
            .collect();
        info!("generated {} ornaments ({})", self.population.total(), summary.join(", "));
    }

    /// Resize the population; only regenerates when the size changes
    pub fn set_count(&mut self, count: usize) -> bool {
        if count == self.count {
            return false;
        }
        self.count = count;
        self.regenerate();
        true
    }

    /// Resize from an untrusted signed count
    pub fn set_count_checked(&mut self, count: i64) -> Result<bool, String> {
        match usize::try_from(count) {
            Ok(count) => Ok(self.set_count(count)),
            Err(_) => {
                warn!("rejected negative ornament count {}", count);
                Err(format!("ornament count must not be negative, got {}", count))
            }
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Takes effect on the next tick
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            debug!("mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggle());
        self.mode
    }

    /// Advance one frame by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> Result<FrameStats, String> {
        let delta_time = self.clock.tick(dt);
        let input = FrameInput {
            delta_time,
            elapsed_time: self.clock.elapsed(),
            mode: self.mode,
        };
        self.animator
            .update(&self.population, &mut self.batches, input)
            .map_err(|e| e.to_string())
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn batches(&self) -> &BatchSet {
        &self.batches
    }

    pub fn batches_mut(&mut self) -> &mut BatchSet {
        &mut self.batches
    }
}
