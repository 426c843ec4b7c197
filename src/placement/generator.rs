use std::f32::consts::{PI, TAU};
use rand::Rng;
use super::PlacementParams;
use crate::math::Vec3;
use crate::ornament::{OrnamentKind, style_for};
use crate::population::{InstanceRecord, Population};

/// Rejected generation request
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementError {
    NegativeCount(i64),
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::NegativeCount(n) => write!(f, "ornament count must not be negative, got {}", n),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Normalized height for a uniform sample; `bias > 1` pulls samples toward 0
pub fn sample_height_norm(u: f32, bias: f32) -> f32 {
    u.powf(bias)
}

/// Builds a fresh population from a random source
#[derive(Debug, Clone, Default)]
pub struct PlacementGenerator {
    pub params: PlacementParams,
}

impl PlacementGenerator {
    pub fn new(params: PlacementParams) -> Self {
        Self { params }
    }

    /// Generate from an untrusted signed count
    pub fn generate_checked<R: Rng + ?Sized>(&self, count: i64, rng: &mut R) -> Result<Population, PlacementError> {
        let count = usize::try_from(count).map_err(|_| PlacementError::NegativeCount(count))?;
        Ok(self.generate(count, rng))
    }

    /// Generate `count` records and partition them by kind
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Population {
        let records: Vec<InstanceRecord> = (0..count).map(|_| self.sample_record(rng)).collect();
        let population = Population::from_records(records);
        log::debug!("placed {} ornaments, per kind {:?}", population.total(), population.counts());
        population
    }

    fn sample_record<R: Rng + ?Sized>(&self, rng: &mut R) -> InstanceRecord {
        let kind = OrnamentKind::from_unit(rng.gen::<f32>());
        let target_position = self.sample_target(rng);
        let chaos_position = self.sample_chaos(rng);

        let style = style_for(kind);
        let scale = style.sample_scale(rng);
        let color = style.sample_color(rng);
        let speed = rng.gen_range(self.params.speed_min..self.params.speed_max);
        let rotation_seed = (rng.gen_range(0.0..PI), rng.gen_range(0.0..PI));

        InstanceRecord {
            chaos_position,
            target_position,
            kind,
            color,
            scale,
            speed,
            rotation_seed,
        }
    }

    /// Point on the bottom-heavy spiral around the trunk
    pub fn sample_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let p = &self.params;

        let y_norm = sample_height_norm(rng.gen::<f32>(), p.height_bias);
        let y = y_norm * p.tree_height + p.base_offset;

        // Wide at the bottom, narrow at the top
        let r_scale = 1.0 - y_norm;
        let theta = y * p.winding_rate + rng.gen_range(0.0..TAU);
        let r = p.max_radius * r_scale + rng.gen::<f32>() * p.radial_jitter;

        Vec3::new(r * theta.cos(), y, r * theta.sin())
    }

    /// Point uniformly distributed over directions on the chaos shell
    pub fn sample_chaos<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let p = &self.params;

        let radius = p.chaos_min_radius + rng.gen::<f32>() * p.chaos_radius_span;
        let theta = rng.gen_range(0.0..TAU);
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();

        Vec3::from_spherical(radius, phi, theta) + Vec3::new(0.0, p.chaos_center_y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn test_exact_count() {
        let gen = PlacementGenerator::default();
        for n in [0usize, 1, 7, 8, 100, 1234] {
            let pop = gen.generate(n, &mut rng(n as u64));
            assert_eq!(pop.total(), n);
            assert_eq!(pop.groups().len(), 8);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        let pop = PlacementGenerator::default().generate(0, &mut rng(1));
        assert!(pop.is_empty());
        assert!(pop.groups().iter().all(|g| g.is_empty()));
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = PlacementGenerator::default()
            .generate_checked(-5, &mut rng(1))
            .unwrap_err();
        assert_eq!(err, PlacementError::NegativeCount(-5));
        assert!(err.to_string().contains("-5"));

        let ok = PlacementGenerator::default().generate_checked(12, &mut rng(1)).unwrap();
        assert_eq!(ok.total(), 12);
    }

    #[test]
    fn test_kind_shares_near_one_eighth() {
        let n = 8000;
        let pop = PlacementGenerator::default().generate(n, &mut rng(42));
        // Binomial(8000, 1/8): mean 1000, sd ~29.6
        for group in pop.groups() {
            let len = group.len() as i64;
            assert!((len - 1000).abs() < 150, "{} has {}", group.kind(), len);
        }
    }

    #[test]
    fn test_height_bias_favours_bottom() {
        let mut r = rng(9);
        let mut samples: Vec<f32> = (0..5001).map(|_| sample_height_norm(r.gen::<f32>(), 2.5)).collect();
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = samples[samples.len() / 2];
        // 0.5^2.5 ~= 0.177
        assert!(median < 0.5);
        assert!((median - 0.177).abs() < 0.05);
    }

    #[test]
    fn test_target_within_cone() {
        let gen = PlacementGenerator::default();
        let p = gen.params;
        let mut r = rng(5);
        for _ in 0..2000 {
            let t = gen.sample_target(&mut r);
            assert!(t.y >= p.base_offset && t.y <= p.base_offset + p.tree_height);
            let y_norm = (t.y - p.base_offset) / p.tree_height;
            let radial = (t.x * t.x + t.z * t.z).sqrt();
            let cone = p.max_radius * (1.0 - y_norm);
            assert!(radial >= cone - 1e-3 && radial <= cone + p.radial_jitter + 1e-3);
        }
    }

    #[test]
    fn test_chaos_on_shell() {
        let gen = PlacementGenerator::default();
        let center = Vec3::new(0.0, 5.0, 0.0);
        let mut r = rng(6);
        let mut upper = 0;
        let n = 4000;
        for _ in 0..n {
            let c = gen.sample_chaos(&mut r);
            let d = c.distance(&center);
            assert!(d >= 15.0 - 1e-3 && d <= 30.0 + 1e-3);
            if c.y > center.y {
                upper += 1;
            }
        }
        // Uniform directions split evenly between hemispheres
        assert!((upper as f32 / n as f32 - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_record_ranges() {
        let pop = PlacementGenerator::default().generate(2000, &mut rng(77));
        for record in pop.iter() {
            let style = style_for(record.kind);
            assert!(record.speed >= 0.5 && record.speed < 2.0);
            assert!(record.scale >= style.scale_min && record.scale < style.scale_max);
            assert!(record.rotation_seed.0 >= 0.0 && record.rotation_seed.0 < PI);
            assert!(record.rotation_seed.1 >= 0.0 && record.rotation_seed.1 < PI);
        }
    }

    #[test]
    fn test_regeneration_differs_but_keeps_shape() {
        let gen = PlacementGenerator::default();
        let a = gen.generate(300, &mut rng(1));
        let b = gen.generate(300, &mut rng(2));
        assert_eq!(a.total(), b.total());
        let a_first: Vec<_> = a.iter().map(|r| r.target_position).collect();
        let b_first: Vec<_> = b.iter().map(|r| r.target_position).collect();
        assert_ne!(a_first, b_first);
        for pop in [&a, &b] {
            assert!(pop.iter().all(|r| OrnamentKind::ALL.contains(&r.kind)));
        }
    }
}
