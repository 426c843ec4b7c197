use serde::{Deserialize, Serialize};

/// Parameters controlling where ornaments are placed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    /// Usable height of the formed tree
    pub tree_height: f32,
    /// Height of the lowest ornament above the ground
    pub base_offset: f32,
    /// Exponent applied to the height sample; above 1 favours the bottom
    pub height_bias: f32,
    /// Spiral angle gained per unit of height (radians)
    pub winding_rate: f32,
    /// Cone radius at the base
    pub max_radius: f32,
    /// Extra outward radius, uniform in [0, radial_jitter)
    pub radial_jitter: f32,
    /// Inner radius of the chaos shell
    pub chaos_min_radius: f32,
    /// Shell thickness; radius is uniform in [min, min + span)
    pub chaos_radius_span: f32,
    /// Vertical offset of the chaos shell center
    pub chaos_center_y: f32,
    /// Lower bound of the per-instance speed
    pub speed_min: f32,
    /// Upper bound (exclusive) of the per-instance speed
    pub speed_max: f32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            tree_height: 11.0,
            base_offset: 0.5,
            height_bias: 2.5,
            winding_rate: 10.0,
            max_radius: 4.5,
            radial_jitter: 0.5,
            chaos_min_radius: 15.0,
            chaos_radius_span: 15.0,
            chaos_center_y: 5.0,
            speed_min: 0.5,
            speed_max: 2.0,
        }
    }
}

impl PlacementParams {
    fn fields(&self) -> [(&'static str, f32); 11] {
        [
            ("tree_height", self.tree_height),
            ("base_offset", self.base_offset),
            ("height_bias", self.height_bias),
            ("winding_rate", self.winding_rate),
            ("max_radius", self.max_radius),
            ("radial_jitter", self.radial_jitter),
            ("chaos_min_radius", self.chaos_min_radius),
            ("chaos_radius_span", self.chaos_radius_span),
            ("chaos_center_y", self.chaos_center_y),
            ("speed_min", self.speed_min),
            ("speed_max", self.speed_max),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.fields() {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }
        if !(self.tree_height > 0.0) {
            return Err(format!("tree_height must be positive, got {}", self.tree_height));
        }
        if !(self.height_bias > 0.0) {
            return Err(format!("height_bias must be positive, got {}", self.height_bias));
        }
        if self.max_radius < 0.0 || self.radial_jitter < 0.0 {
            return Err("tree radii must not be negative".to_string());
        }
        if self.chaos_min_radius < 0.0 || self.chaos_radius_span < 0.0 {
            return Err("chaos radii must not be negative".to_string());
        }
        if !(self.speed_min > 0.0 && self.speed_min < self.speed_max) {
            return Err(format!(
                "speed range [{}, {}) is empty or not positive",
                self.speed_min, self.speed_max
            ));
        }
        Ok(())
    }
}
