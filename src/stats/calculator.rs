//! Statistics Calculator Module
//! Descriptive statistics for numeric columns.

use polars::prelude::*;
use statrs::statistics::Statistics;

/// Percentiles reported by the descriptive summary.
pub const QUARTILES: [f64; 3] = [25.0, 50.0, 75.0];

/// Descriptive statistics for a single numeric column.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub quartiles: [f64; 3],
    pub max: f64,
}

impl Default for DescriptiveStats {
    fn default() -> Self {
        Self {
            column: String::new(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            quartiles: [f64::NAN; 3],
            max: f64::NAN,
        }
    }
}

/// Handles statistical calculations over column values.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn compute_descriptive_stats(values: &[f64]) -> DescriptiveStats {
        let n = values.len();
        if n == 0 {
            return DescriptiveStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        DescriptiveStats {
            column: String::new(),
            count: n,
            mean: values.iter().mean(),
            // NaN for a single value
            std: values.iter().std_dev(),
            min: sorted[0],
            quartiles: QUARTILES.map(|p| Self::percentile(&sorted, p)),
            max: sorted[n - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Non-missing values of a numeric column as `f64`.
    ///
    /// Nulls and NaNs are dropped.
    pub fn column_values(column: &Column) -> PolarsResult<Vec<f64>> {
        let cast = column.cast(&DataType::Float64)?;
        let values = cast
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect();
        Ok(values)
    }

    /// Number of missing cells in a column: nulls, plus NaNs for floats.
    pub fn missing_count(column: &Column) -> PolarsResult<usize> {
        let nan_count = match column.dtype() {
            DataType::Float32 | DataType::Float64 => column
                .cast(&DataType::Float64)?
                .f64()?
                .into_iter()
                .flatten()
                .filter(|v| v.is_nan())
                .count(),
            _ => 0,
        };
        Ok(column.null_count() + nan_count)
    }
}
