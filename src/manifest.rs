/// Run manifest generation summarising the produced benchmark files.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One generated benchmark file.
#[derive(Serialize, Deserialize, Debug)]
pub struct GeneratedFile {
    /// Path of the .xyz file relative to the invocation directory.
    pub path: String,
    pub point_count: usize,
    /// Shape distribution the points were drawn from.
    pub shape: String,
    pub elapsed_seconds: f64,
}

/// Manifest linking every file produced by one generator run.
/// Bookkeeping for downstream benchmark tooling, not a format contract.
#[derive(Serialize, Deserialize, Debug)]
pub struct RunManifest {
    /// Seed used for every generation call in the run.
    pub seed: u64,
    pub files: Vec<GeneratedFile>,
    pub total_seconds: f64,
}

impl RunManifest {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            files: Vec::new(),
            total_seconds: 0.0,
        }
    }

    /// Record one completed generation call.
    pub fn record(&mut self, path: &Path, point_count: usize, shape: &str, elapsed_seconds: f64) {
        self.files.push(GeneratedFile {
            path: path.display().to_string(),
            point_count,
            shape: shape.to_string(),
            elapsed_seconds,
        });
        self.total_seconds += elapsed_seconds;
    }

    /// Write the manifest as manifest.json inside the output directory.
    pub fn save(&self, output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let manifest_path = output_dir.join("manifest.json");
        let manifest_json = serde_json::to_string_pretty(self)?;
        fs::write(&manifest_path, manifest_json)?;

        println!("Generated run manifest: {}", manifest_path.display());
        Ok(())
    }
}
