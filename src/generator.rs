/// Point cloud generation pipeline: seed, sample, normalise, colour, write.
use crate::bounds::AxisBounds;
use crate::constants::{AXIS_HALF_RANGE, RNG_SEED};
use crate::shape::ShapeKind;
use crate::xyz_writer::write_xyz;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::time::{Duration, Instant};

/// A normalised point set with derived per-point colour channels.
/// Parallel arrays, one entry per point, all of identical length.
/// Transient: built and serialised inside one generation call.
pub struct PointSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub red: Vec<f64>,
    pub green: Vec<f64>,
    pub blue: Vec<f64>,
}

impl PointSet {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Synthetic point cloud generator with a fixed per-call seed.
/// Every call reseeds a locally scoped generator, so repeated calls with
/// the same point count produce byte-identical output files.
pub struct PointCloudGenerator {
    seed: u64,
}

impl PointCloudGenerator {
    pub fn new() -> Self {
        Self { seed: RNG_SEED }
    }

    /// Generate `num_points` points and write them to `filename`.
    ///
    /// Shape selection, sampling order, normalisation, and the output
    /// format are all deterministic for a given point count. Returns the
    /// wall-clock time spanning sampling through file close. Fails if the
    /// output directory is missing or an axis collapses to a zero-width
    /// range during normalisation.
    pub fn generate(
        &self,
        filename: &Path,
        num_points: usize,
    ) -> Result<Duration, Box<dyn std::error::Error>> {
        let start = Instant::now();

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let shape = ShapeKind::for_point_count(num_points);
        let mut axes = shape.sample(num_points, &mut rng);

        // Each axis is rescaled against its own observed range.
        AxisBounds::of(&axes.x).normalize_into("x", &mut axes.x)?;
        AxisBounds::of(&axes.y).normalize_into("y", &mut axes.y)?;
        AxisBounds::of(&axes.z).normalize_into("z", &mut axes.z)?;

        // Colour is a linear remap of the normalised coordinate into [0, 1].
        let red = colour_channel(&axes.x);
        let green = colour_channel(&axes.y);
        let blue = colour_channel(&axes.z);

        let points = PointSet {
            x: axes.x,
            y: axes.y,
            z: axes.z,
            red,
            green,
            blue,
        };

        write_xyz(filename, &points)?;

        Ok(start.elapsed())
    }
}

impl Default for PointCloudGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a normalised [-10, 10] coordinate array to [0, 1] colour values.
fn colour_channel(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|v| (v + AXIS_HALF_RANGE) / (2.0 * AXIS_HALF_RANGE))
        .collect()
}
