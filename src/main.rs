//! datastat - CSV Dataset Loading & Statistics Report
//!
//! Loads a CSV dataset (or generates a sample one), prints a descriptive
//! summary and higher-order statistics for its numeric columns.

mod app;
mod data;
mod report;
mod stats;

use app::RunOptions;
use clap::Parser;
use report::DEFAULT_PREVIEW_ROWS;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// datastat - dataset summary and advanced statistics
#[derive(Parser)]
#[command(name = "datastat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to analyse [default: <program dir>/DVC/data/sample_data.csv]
    path: Option<PathBuf>,
    /// Seed for the sample dataset generated when the file is missing
    #[arg(long)]
    seed: Option<u64>,
    /// Number of leading rows to preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    head: usize,
}

impl Cli {
    fn into_options(self) -> anyhow::Result<RunOptions> {
        let path = match self.path {
            Some(path) => path,
            None => app::default_data_path()?,
        };
        Ok(RunOptions {
            path,
            seed: self.seed,
            preview_rows: self.head,
        })
    }
}

/// Run and flush; a failed flush is reported like any other error.
fn run_flushed<W: Write>(options: &RunOptions, out: &mut W) -> anyhow::Result<data::DataSource> {
    let source = app::run(options, out)?;
    out.flush()?;
    Ok(source)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = cli
        .into_options()
        .and_then(|options| run_flushed(&options, &mut out));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
