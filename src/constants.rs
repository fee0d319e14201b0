/// Shared configuration for test data generation

/// Fixed RNG seed so repeated runs produce byte-identical files
pub const RNG_SEED: u64 = 42;

/// Half-width of the normalised coordinate range, i.e. [-10, 10]
pub const AXIS_HALF_RANGE: f64 = 10.0;

/// Torus major radius (distance from centre to tube centre)
pub const TORUS_MAJOR_RADIUS: f64 = 8.0;

/// Torus minor radius (tube radius)
pub const TORUS_MINOR_RADIUS: f64 = 3.0;

/// Benchmark point counts, generated in order
pub const TEST_SIZES: &[usize] = &[
    10_000, 50_000, 100_000, 250_000, 500_000, 1_000_000, 2_000_000,
];

/// Output directory for generated .xyz files and the run manifest
pub const OUTPUT_DIR: &str = "test_data";

/// Fields per output line (x y z r g b)
pub const FIELDS_PER_POINT: usize = 6;

/// Assumed bytes per field for the approximate file size estimate.
/// Actual lines are variable-width text, so this is a display heuristic only.
pub const ESTIMATE_BYTES_PER_FIELD: usize = 4;

/// Chunk size for the parallel per-axis bounds reduction
pub const BOUNDS_CHUNK_SIZE: usize = 25_000;

/// Progress bar position update interval (points)
pub const PROGRESS_UPDATE_INTERVAL: usize = 10_000;
