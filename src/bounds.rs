/// Per-axis coordinate bounds tracking and normalisation
use crate::constants::{AXIS_HALF_RANGE, BOUNDS_CHUNK_SIZE};
use rayon::prelude::*;

/// Observed minimum and maximum of a single coordinate axis.
#[derive(Debug, Clone, Copy)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Update bounds with a new value
    pub fn update(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Scan an axis array for its bounds using chunked parallel reduction.
    pub fn of(values: &[f64]) -> Self {
        values
            .par_chunks(BOUNDS_CHUNK_SIZE)
            .map(|chunk| {
                let mut local = AxisBounds::new();
                for &value in chunk {
                    local.update(value);
                }
                local
            })
            .reduce_with(|mut a, b| {
                a.min = a.min.min(b.min);
                a.max = a.max.max(b.max);
                a
            })
            .unwrap_or_else(AxisBounds::new)
    }

    /// Observed width of the axis
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Affinely remap the array in place so min maps to -10 and max to +10.
    ///
    /// A zero-width range cannot be remapped (the divisor is the observed
    /// width), so it is reported as an error rather than emitting NaN
    /// coordinates. Only reachable when every sample shares one value,
    /// e.g. a single-point set.
    pub fn normalize_into(
        &self,
        axis_name: &str,
        values: &mut [f64],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let width = self.width();
        if width <= 0.0 {
            return Err(format!(
                "axis {} has zero-width range (all {} samples equal {})",
                axis_name,
                values.len(),
                self.min
            )
            .into());
        }

        for value in values.iter_mut() {
            *value = 2.0 * AXIS_HALF_RANGE * (*value - self.min) / width - AXIS_HALF_RANGE;
        }

        Ok(())
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::new()
    }
}
