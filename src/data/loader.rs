//! CSV Data Loader Module
//! Reads a dataset from disk with Polars, falling back to a generated sample
//! when the file is absent.

use crate::data::SampleGenerator;
use polars::prelude::*;
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Failed to generate sample dataset: {0}")]
    Sample(#[from] PolarsError),
}

/// Result of attempting to read a dataset file.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(DataFrame),
    /// The path does not resolve to a regular file.
    NotFound(PathBuf),
}

/// Where a dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Sample,
}

/// A dataset ready for reporting.
#[derive(Debug)]
pub struct LoadedDataset {
    pub frame: DataFrame,
    pub source: DataSource,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file with a header row, inferring column types from every
    /// row.
    ///
    /// Only a missing file is reported as [`LoadOutcome::NotFound`]; every
    /// other failure is returned as an error.
    pub fn load(path: &Path) -> Result<LoadOutcome, LoaderError> {
        if !path.is_file() {
            return Ok(LoadOutcome::NotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .finish()
            .and_then(|lazy| lazy.collect())
            .and_then(promote_empty_columns)
            .map_err(|source| LoaderError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(LoadOutcome::Loaded(df))
    }

    /// Load `path`, or generate the sample dataset if it does not exist.
    pub fn load_or_sample<R: Rng>(
        path: &Path,
        rng: &mut R,
    ) -> Result<LoadedDataset, LoaderError> {
        match Self::load(path)? {
            LoadOutcome::Loaded(frame) => Ok(LoadedDataset {
                frame,
                source: DataSource::File(path.to_path_buf()),
            }),
            LoadOutcome::NotFound(_) => Ok(LoadedDataset {
                frame: SampleGenerator::generate(rng)?,
                source: DataSource::Sample,
            }),
        }
    }
}

/// Columns with no values at all are read as text; treat them as floats so
/// they are described with a zero count.
fn promote_empty_columns(df: DataFrame) -> PolarsResult<DataFrame> {
    let height = df.height();
    if height == 0 {
        return Ok(df);
    }

    let columns = df
        .get_columns()
        .iter()
        .map(|col| match col.dtype() {
            DataType::String | DataType::Null if col.null_count() == height => {
                col.cast(&DataType::Float64)
            }
            _ => Ok(col.clone()),
        })
        .collect::<PolarsResult<Vec<_>>>()?;
    DataFrame::new(columns)
}

/// Whether a column holds integer or floating-point values.
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}
