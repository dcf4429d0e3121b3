//! Load → report → advanced statistics pipeline.

use crate::data::{DataLoader, DataSource};
use crate::report::DatasetReport;
use crate::stats::AdvancedStats;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;

/// Dataset location relative to the executable's directory.
const DEFAULT_DATA_PATH: [&str; 3] = ["DVC", "data", "sample_data.csv"];

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub path: PathBuf,
    /// Seeds the sample generator; thread RNG when `None`.
    pub seed: Option<u64>,
    pub preview_rows: usize,
}

/// `<program_dir>/DVC/data/sample_data.csv`
pub fn default_data_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate executable")?;
    let mut path = exe
        .parent()
        .map(PathBuf::from)
        .context("executable has no parent directory")?;
    path.extend(DEFAULT_DATA_PATH);
    Ok(path)
}

/// Run the full analysis, writing the report to `out`.
///
/// Returns where the analysed dataset came from.
pub fn run<W: Write>(options: &RunOptions, out: &mut W) -> anyhow::Result<DataSource> {
    let path = &options.path;
    let loaded = match options.seed {
        Some(seed) => DataLoader::load_or_sample(path, &mut StdRng::seed_from_u64(seed)),
        None => DataLoader::load_or_sample(path, &mut rand::rng()),
    }
    .with_context(|| format!("cannot load dataset {}", path.display()))?;

    match &loaded.source {
        DataSource::File(p) => {
            writeln!(out, "Loading dataset from: {}", p.display())?;
            writeln!(out, "✓ Successfully loaded dataset from: {}", p.display())?;
        }
        DataSource::Sample => {
            writeln!(out, "Data file not found at {}", path.display())?;
            writeln!(out, "Creating a sample dataset for demonstration...")?;
            writeln!(out, "✓ Sample dataset created successfully")?;
        }
    }

    let report = DatasetReport::from_frame(&loaded.frame, options.preview_rows)
        .context("cannot summarize dataset")?;
    write!(out, "{report}")?;

    let advanced =
        AdvancedStats::from_frame(&loaded.frame).context("cannot compute advanced statistics")?;
    write!(out, "{advanced}")?;

    writeln!(out, "\n✓ Analysis complete!")?;
    Ok(loaded.source)
}
