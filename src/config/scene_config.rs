use serde::{Deserialize, Serialize};
use crate::animation::{AnimatorParams, Mode};
use crate::placement::PlacementParams;

pub const DEFAULT_COUNT: usize = 800;

/// YAML scene description; every field is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of ornaments
    pub count: usize,
    /// Layout at startup
    pub mode: Mode,
    /// Fixed RNG seed; fresh entropy when absent
    pub seed: Option<u64>,
    pub placement: PlacementParams,
    pub animation: AnimatorParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            mode: Mode::Chaos,
            seed: None,
            placement: PlacementParams::default(),
            animation: AnimatorParams::default(),
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("YAML write error: {}", e))
    }

    pub fn validate(&self) -> Result<(), String> {
        self.placement.validate()?;

        let a = &self.animation;
        if !(a.settle_distance >= 0.0) {
            return Err(format!("settle_distance must not be negative, got {}", a.settle_distance));
        }
        if !a.wobble_amplitude.is_finite() || !a.wobble_frequency.is_finite() {
            return Err("wobble parameters must be finite".to_string());
        }
        Ok(())
    }
}
