/// Point cloud test data generator main entry point
use indicatif::HumanCount;
use point_cloud_test_data::constants::{
    ESTIMATE_BYTES_PER_FIELD, FIELDS_PER_POINT, OUTPUT_DIR, RNG_SEED, TEST_SIZES,
};
use point_cloud_test_data::generator::PointCloudGenerator;
use point_cloud_test_data::manifest::RunManifest;
use point_cloud_test_data::shape::ShapeKind;
use std::fs;
use std::path::Path;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Point Cloud Test Data Generator");
    println!("{}", "=".repeat(50));
    println!();

    fs::create_dir_all(OUTPUT_DIR)?;

    let generator = PointCloudGenerator::new();
    let mut manifest = RunManifest::new(RNG_SEED);
    let mut total_time = Duration::ZERO;

    for &size in TEST_SIZES {
        let shape = ShapeKind::for_point_count(size);
        let filename = Path::new(OUTPUT_DIR).join(format!("test_{}.xyz", size));

        println!(
            "Generating {} points ({})...",
            HumanCount(size as u64),
            shape.name()
        );

        let elapsed = generator.generate(&filename, size)?;
        total_time += elapsed;
        manifest.record(&filename, size, shape.name(), elapsed.as_secs_f64());

        // Rough size estimate for progress display; actual lines are
        // variable-width text.
        let estimated_mb =
            (size * FIELDS_PER_POINT * ESTIMATE_BYTES_PER_FIELD) as f64 / (1024.0 * 1024.0);
        println!("  Done in {:.2}s", elapsed.as_secs_f64());
        println!("  File size: ~{:.1} MB", estimated_mb);
    }

    manifest.save(Path::new(OUTPUT_DIR))?;

    println!();
    println!("Total generation time: {:.2}s", total_time.as_secs_f64());
    println!("Test files created in {}/", OUTPUT_DIR);

    Ok(())
}
