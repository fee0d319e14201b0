/// Plain-text .xyz serialisation for generated point sets
use crate::constants::PROGRESS_UPDATE_INTERVAL;
use crate::generator::PointSet;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a point set to `path` in the .xyz text format.
///
/// Layout: one header line `# Point cloud with <N> points`, then one line
/// per point with six space-separated fields. Coordinates carry six
/// fractional digits, colour channels three. An existing file at `path`
/// is truncated.
pub fn write_xyz(path: &Path, points: &PointSet) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Point cloud with {} points", points.len())?;

    let pb = ProgressBar::new(points.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} points ({percent}%) {msg}")
            .unwrap()
            .progress_chars("▉▊▋▌▍▎▏ "),
    );
    pb.set_message("Writing points");

    for i in 0..points.len() {
        writeln!(
            writer,
            "{:.6} {:.6} {:.6} {:.3} {:.3} {:.3}",
            points.x[i], points.y[i], points.z[i], points.red[i], points.green[i], points.blue[i]
        )?;

        if i % PROGRESS_UPDATE_INTERVAL == 0 {
            pb.set_position(i as u64);
        }
    }

    writer.flush()?;
    pb.finish_and_clear();

    Ok(())
}
