//! Text rendering of per-column moments.

use crate::report::banner;
use crate::stats::{AdvancedStats, ColumnMoments};
use std::fmt;

impl fmt::Display for ColumnMoments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}:", self.column)?;
        writeln!(f, "  Skewness: {:.4}", self.skewness)?;
        writeln!(f, "  Kurtosis: {:.4}", self.kurtosis)?;
        writeln!(f, "  Variance: {:.4}", self.variance)?;
        writeln!(f, "  Standard Error: {:.4}", self.standard_error)
    }
}

impl fmt::Display for AdvancedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "ADVANCED STATISTICS")?;
        for moments in &self.columns {
            write!(f, "{moments}")?;
        }
        Ok(())
    }
}
