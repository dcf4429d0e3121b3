//! Higher-order moments and dispersion measures.
//!
//! Every measure has a minimum sample size below which it is undefined:
//!
//! | measure        | minimum n |
//! |----------------|-----------|
//! | variance       | 2         |
//! | standard error | 2         |
//! | skewness       | 3         |
//! | kurtosis       | 4         |
//!
//! Below that size the result is `f64::NAN`. A constant column has zero
//! skewness and kurtosis.

use crate::data::is_numeric;
use crate::stats::StatsCalculator;
use polars::prelude::*;
use statrs::statistics::Statistics;

/// Secondary statistics for one numeric column.
#[derive(Debug, Clone)]
pub struct ColumnMoments {
    pub column: String,
    pub skewness: f64,
    pub kurtosis: f64,
    pub variance: f64,
    pub standard_error: f64,
}

impl ColumnMoments {
    pub fn compute(column: &str, values: &[f64]) -> Self {
        Self {
            column: column.to_string(),
            skewness: skewness(values),
            kurtosis: kurtosis(values),
            variance: variance(values),
            standard_error: standard_error(values),
        }
    }
}

/// Sample variance with an n−1 denominator.
pub fn variance(values: &[f64]) -> f64 {
    values.iter().variance()
}

/// Standard error of the mean: sample standard deviation over √n.
pub fn standard_error(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    values.iter().std_dev() / n.sqrt()
}

/// Sum of squared and higher-power deviations from the mean.
fn central_sums(values: &[f64]) -> (f64, f64, f64) {
    let mean = values.iter().mean();
    values.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), &x| {
        let d = x - mean;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    })
}

/// Adjusted Fisher-Pearson skewness (G₁).
///
/// ```text
/// G₁ = √(n(n−1)) / (n−2) × m₃ / m₂^{3/2}
/// ```
/// where `m₂`, `m₃` are the biased central moments.
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 3 {
        return f64::NAN;
    }
    let nf = n as f64;
    let (s2, s3, _) = central_sums(values);
    let m2 = s2 / nf;
    if m2 == 0.0 {
        return 0.0;
    }
    let m3 = s3 / nf;
    (nf * (nf - 1.0)).sqrt() / (nf - 2.0) * m3 / m2.powf(1.5)
}

/// Excess kurtosis with bias correction (G₂).
///
/// ```text
/// G₂ = n(n+1)(n−1) Σd⁴ / ((n−2)(n−3) (Σd²)²) − 3(n−1)² / ((n−2)(n−3))
/// ```
pub fn kurtosis(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 4 {
        return f64::NAN;
    }
    let nf = n as f64;
    let (s2, _, s4) = central_sums(values);
    if s2 == 0.0 {
        return 0.0;
    }
    let denom = (nf - 2.0) * (nf - 3.0);
    let numer = nf * (nf + 1.0) * (nf - 1.0) * s4;
    numer / (denom * s2 * s2) - 3.0 * (nf - 1.0).powi(2) / denom
}

/// Moments for every numeric column of a frame, in column order.
#[derive(Debug, Clone, Default)]
pub struct AdvancedStats {
    pub columns: Vec<ColumnMoments>,
}

impl AdvancedStats {
    /// Non-numeric columns are skipped.
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        let mut columns = Vec::new();
        for column in df.get_columns() {
            if !is_numeric(column.dtype()) {
                continue;
            }
            let values = StatsCalculator::column_values(column)?;
            columns.push(ColumnMoments::compute(column.name().as_str(), &values));
        }
        Ok(Self { columns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_variance_and_standard_error() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&v), 4.571428571428571, epsilon = 1e-12);
        assert_relative_eq!(
            standard_error(&v),
            4.571428571428571f64.sqrt() / 8f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_skewness_symmetric_is_zero() {
        assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).abs() < 1e-14);
        assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]) > 0.0);
    }

    #[test]
    fn test_skewness_known_value() {
        // pandas Series([1, 2, 3, 10]).skew()
        assert_relative_eq!(
            skewness(&[1.0, 2.0, 3.0, 10.0]),
            1.763632614803888,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_kurtosis_known_value() {
        // pandas Series([1, 2, 3, 10]).kurt()
        assert_relative_eq!(
            kurtosis(&[1.0, 2.0, 3.0, 10.0]),
            3.228,
            epsilon = 1e-10
        );
        assert!(kurtosis(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]) < 0.0);
    }

    #[test]
    fn test_constant_values() {
        let v = [3.0; 6];
        assert_eq!(skewness(&v), 0.0);
        assert_eq!(kurtosis(&v), 0.0);
        assert_eq!(variance(&v), 0.0);
    }

    #[test]
    fn test_single_value_is_nan() {
        let m = ColumnMoments::compute("x", &[42.0]);
        assert!(m.skewness.is_nan());
        assert!(m.kurtosis.is_nan());
        assert!(m.variance.is_nan());
        assert!(m.standard_error.is_nan());
    }

    #[test]
    fn test_minimum_sizes() {
        assert!(skewness(&[1.0, 2.0]).is_nan());
        assert!(kurtosis(&[1.0, 2.0, 3.0]).is_nan());
        assert!(!variance(&[1.0, 2.0]).is_nan());
        assert!(variance(&[]).is_nan());
    }

    #[test]
    fn test_from_frame_skips_text_and_missing() {
        let df = DataFrame::new(vec![
            Column::new("name".into(), vec!["a", "b", "c"]),
            Column::new("n".into(), vec![1i64, 2, 3]),
            Column::new("score".into(), vec![Some(5.0), None, None]),
        ])
        .expect("frame");

        let stats = AdvancedStats::from_frame(&df).expect("stats");
        let names: Vec<&str> = stats.columns.iter().map(|m| m.column.as_str()).collect();
        assert_eq!(names, vec!["n", "score"]);

        let n = &stats.columns[0];
        assert_relative_eq!(n.variance, 1.0);
        assert_relative_eq!(n.skewness, 0.0, epsilon = 1e-12);

        let score = &stats.columns[1];
        assert!(score.variance.is_nan());
        assert!(score.standard_error.is_nan());
    }
}
