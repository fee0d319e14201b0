/// Geometric shape distributions for synthetic point sampling
use crate::constants::{AXIS_HALF_RANGE, TORUS_MAJOR_RADIUS, TORUS_MINOR_RADIUS};
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// Geometric distribution used to sample a point set.
/// Selected from the point count alone, so every run with the same
/// count draws the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Cube,
    Torus,
}

/// Parallel per-axis coordinate arrays for a sampled point set.
/// All three arrays have identical length.
#[derive(Debug, Clone)]
pub struct SampledAxes {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl SampledAxes {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl ShapeKind {
    /// Select the shape for a point count (count mod 3).
    pub fn for_point_count(num_points: usize) -> Self {
        match num_points % 3 {
            0 => Self::Sphere,
            1 => Self::Cube,
            _ => Self::Torus,
        }
    }

    /// Lowercase shape name for status output and the run manifest.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Cube => "cube",
            Self::Torus => "torus",
        }
    }

    /// Sample `num_points` points from this distribution.
    ///
    /// The random source is consumed one full variable array at a time
    /// (sphere: theta, phi, r; cube: x, y, z; torus: u, v), so output is
    /// reproducible for a given seeded generator.
    pub fn sample<R: Rng + ?Sized>(&self, num_points: usize, rng: &mut R) -> SampledAxes {
        match self {
            Self::Sphere => sample_sphere(num_points, rng),
            Self::Cube => sample_cube(num_points, rng),
            Self::Torus => sample_torus(num_points, rng),
        }
    }
}

/// Draw `n` independent uniform samples from [low, high).
fn draw_uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(low..high)).collect()
}

/// Random points inside a sphere of radius 10, via spherical coordinates.
fn sample_sphere<R: Rng + ?Sized>(num_points: usize, rng: &mut R) -> SampledAxes {
    let theta = draw_uniform(rng, 0.0, TAU, num_points);
    let phi = draw_uniform(rng, 0.0, PI, num_points);
    let r = draw_uniform(rng, 0.0, AXIS_HALF_RANGE, num_points);

    let mut axes = SampledAxes {
        x: Vec::with_capacity(num_points),
        y: Vec::with_capacity(num_points),
        z: Vec::with_capacity(num_points),
    };

    for i in 0..num_points {
        axes.x.push(r[i] * phi[i].sin() * theta[i].cos());
        axes.y.push(r[i] * phi[i].sin() * theta[i].sin());
        axes.z.push(r[i] * phi[i].cos());
    }

    axes
}

/// Random points inside an axis-aligned cube spanning [-10, 10] per axis.
fn sample_cube<R: Rng + ?Sized>(num_points: usize, rng: &mut R) -> SampledAxes {
    let x = draw_uniform(rng, -AXIS_HALF_RANGE, AXIS_HALF_RANGE, num_points);
    let y = draw_uniform(rng, -AXIS_HALF_RANGE, AXIS_HALF_RANGE, num_points);
    let z = draw_uniform(rng, -AXIS_HALF_RANGE, AXIS_HALF_RANGE, num_points);

    SampledAxes { x, y, z }
}

/// Random points on a torus surface with major radius 8 and minor radius 3.
fn sample_torus<R: Rng + ?Sized>(num_points: usize, rng: &mut R) -> SampledAxes {
    let u = draw_uniform(rng, 0.0, TAU, num_points);
    let v = draw_uniform(rng, 0.0, TAU, num_points);

    let mut axes = SampledAxes {
        x: Vec::with_capacity(num_points),
        y: Vec::with_capacity(num_points),
        z: Vec::with_capacity(num_points),
    };

    for i in 0..num_points {
        let tube = TORUS_MAJOR_RADIUS + TORUS_MINOR_RADIUS * v[i].cos();
        axes.x.push(tube * u[i].cos());
        axes.y.push(tube * u[i].sin());
        axes.z.push(TORUS_MINOR_RADIUS * v[i].sin());
    }

    axes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn shape_selection_follows_count_modulo() {
        assert_eq!(ShapeKind::for_point_count(900), ShapeKind::Sphere);
        assert_eq!(ShapeKind::for_point_count(10_000), ShapeKind::Cube);
        assert_eq!(ShapeKind::for_point_count(50_000), ShapeKind::Torus);
        assert_eq!(ShapeKind::for_point_count(2_000_000), ShapeKind::Torus);
    }

    #[test]
    fn sampling_is_deterministic_for_a_seed() {
        let a = ShapeKind::Sphere.sample(500, &mut seeded_rng());
        let b = ShapeKind::Sphere.sample(500, &mut seeded_rng());
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        assert_eq!(a.z, b.z);
    }

    #[test]
    fn sphere_samples_stay_within_radius() {
        let axes = ShapeKind::Sphere.sample(3_000, &mut seeded_rng());
        assert_eq!(axes.len(), 3_000);

        for i in 0..axes.len() {
            let radius_sq = axes.x[i].powi(2) + axes.y[i].powi(2) + axes.z[i].powi(2);
            assert!(
                radius_sq <= AXIS_HALF_RANGE.powi(2) + 1e-9,
                "point {} outside sphere: r^2 = {}",
                i,
                radius_sq
            );
        }
    }

    #[test]
    fn cube_samples_stay_within_half_range() {
        let axes = ShapeKind::Cube.sample(3_000, &mut seeded_rng());

        for i in 0..axes.len() {
            for v in [axes.x[i], axes.y[i], axes.z[i]] {
                assert!((-AXIS_HALF_RANGE..AXIS_HALF_RANGE).contains(&v));
            }
        }
    }

    #[test]
    fn torus_samples_lie_on_tube_surface() {
        let axes = ShapeKind::Torus.sample(3_000, &mut seeded_rng());

        for i in 0..axes.len() {
            let ring_distance = (axes.x[i].powi(2) + axes.y[i].powi(2)).sqrt();
            let tube_radius_sq =
                (ring_distance - TORUS_MAJOR_RADIUS).powi(2) + axes.z[i].powi(2);
            assert!(
                (tube_radius_sq - TORUS_MINOR_RADIUS.powi(2)).abs() < 1e-9,
                "point {} off torus surface: tube r^2 = {}",
                i,
                tube_radius_sq
            );
        }
    }
}
