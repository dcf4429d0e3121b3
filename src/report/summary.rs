//! Dataset summary report: shape, types, descriptive statistics, missing
//! values and a preview of the leading rows.

use crate::data::is_numeric;
use crate::report::banner;
use crate::stats::{DescriptiveStats, StatsCalculator};
use polars::prelude::*;
use std::fmt;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Everything the summary prints, computed up front.
#[derive(Debug, Clone)]
pub struct DatasetReport {
    pub rows: usize,
    pub columns: usize,
    /// `(name, dtype)` in frame order.
    pub dtypes: Vec<(String, String)>,
    pub describe: Vec<DescriptiveStats>,
    /// Only columns with at least one missing cell.
    pub missing: Vec<(String, usize)>,
    pub preview: DataFrame,
}

impl DatasetReport {
    pub fn from_frame(df: &DataFrame, preview_rows: usize) -> PolarsResult<Self> {
        let (rows, columns) = df.shape();
        let mut dtypes = Vec::with_capacity(columns);
        let mut describe = Vec::new();
        let mut missing = Vec::new();

        for column in df.get_columns() {
            let name = column.name().to_string();
            dtypes.push((name.clone(), column.dtype().to_string()));

            if is_numeric(column.dtype()) {
                let values = StatsCalculator::column_values(column)?;
                let mut stats = StatsCalculator::compute_descriptive_stats(&values);
                stats.column = name.clone();
                describe.push(stats);
            }

            let count = StatsCalculator::missing_count(column)?;
            if count > 0 {
                missing.push((name, count));
            }
        }

        Ok(Self {
            rows,
            columns,
            dtypes,
            describe,
            missing,
            preview: df.head(Some(preview_rows)),
        })
    }

    fn fmt_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "DATASET OVERVIEW")?;
        writeln!(
            f,
            "\nDataset Shape: {} rows × {} columns",
            self.rows, self.columns
        )?;
        writeln!(f, "\nColumn Names and Types:")?;
        let width = self
            .dtypes
            .iter()
            .map(|(n, _)| n.chars().count())
            .max()
            .unwrap_or(0);
        for (name, dtype) in &self.dtypes {
            writeln!(f, "{name:<width$}    {dtype}")?;
        }
        Ok(())
    }

    fn fmt_describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "DESCRIPTIVE STATISTICS")?;
        if self.describe.is_empty() {
            return writeln!(f, "No numeric columns.");
        }

        let labels = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
        let mut table: Vec<Vec<String>> = Vec::with_capacity(self.describe.len());
        for stats in &self.describe {
            let mut cells = vec![stats.column.clone(), stats.count.to_string()];
            cells.extend(
                [stats.mean, stats.std, stats.min]
                    .into_iter()
                    .chain(stats.quartiles)
                    .chain([stats.max])
                    .map(|v| format!("{v:.4}")),
            );
            table.push(cells);
        }

        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let widths: Vec<usize> = table
            .iter()
            .map(|cells| cells.iter().map(|c| c.chars().count()).max().unwrap_or(0))
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (cells, width) in table.iter().zip(widths.iter().copied()) {
            write!(f, "  {:>width$}", cells[0])?;
        }
        writeln!(f)?;

        for (row, label) in labels.iter().enumerate() {
            write!(f, "{label:<label_width$}")?;
            for (cells, width) in table.iter().zip(widths.iter().copied()) {
                write!(f, "  {:>width$}", cells[row + 1])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn fmt_missing(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "MISSING VALUES")?;
        if self.missing.is_empty() {
            return writeln!(f, "✓ No missing values found!");
        }
        for (name, count) in &self.missing {
            writeln!(f, "{name}: {count}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_overview(f)?;
        self.fmt_describe(f)?;
        self.fmt_missing(f)?;
        banner(f, "FIRST FEW ROWS")?;
        writeln!(f, "{}", self.preview)
    }
}
