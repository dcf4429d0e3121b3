//! Stats module - descriptive statistics and moments

mod calculator;
mod moments;

pub use calculator::{DescriptiveStats, StatsCalculator};
pub use moments::{AdvancedStats, ColumnMoments};
