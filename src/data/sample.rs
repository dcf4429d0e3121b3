//! Synthetic dataset used when no data file is available.

use polars::prelude::*;
use rand::Rng;

pub const SAMPLE_ROWS: usize = 100;

const AGE_RANGE: std::ops::Range<i64> = 18..80;
const INCOME_RANGE: std::ops::Range<i64> = 20_000..150_000;
const SCORE_RANGE: std::ops::Range<f64> = 0.0..100.0;

/// Builds the demonstration dataset.
pub struct SampleGenerator;

impl SampleGenerator {
    /// Generate `ID`, `Age`, `Income` and `Score` columns.
    ///
    /// `ID` runs from 1 to [`SAMPLE_ROWS`]; the other columns are drawn
    /// uniformly from half-open ranges.
    pub fn generate<R: Rng>(rng: &mut R) -> PolarsResult<DataFrame> {
        let ids: Vec<i64> = (1..=SAMPLE_ROWS as i64).collect();
        let ages: Vec<i64> = (0..SAMPLE_ROWS)
            .map(|_| rng.random_range(AGE_RANGE))
            .collect();
        let incomes: Vec<i64> = (0..SAMPLE_ROWS)
            .map(|_| rng.random_range(INCOME_RANGE))
            .collect();
        let scores: Vec<f64> = (0..SAMPLE_ROWS)
            .map(|_| rng.random_range(SCORE_RANGE))
            .collect();

        DataFrame::new(vec![
            Column::new("ID".into(), ids),
            Column::new("Age".into(), ages),
            Column::new("Income".into(), incomes),
            Column::new("Score".into(), scores),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> DataFrame {
        SampleGenerator::generate(&mut StdRng::seed_from_u64(42)).expect("sample")
    }

    fn i64_values(df: &DataFrame, name: &str) -> Vec<i64> {
        df.column(name)
            .expect("column")
            .i64()
            .expect("i64 column")
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn test_shape_and_columns() {
        let df = sample();
        assert_eq!(df.shape(), (SAMPLE_ROWS, 4));
        let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["ID", "Age", "Income", "Score"]);
    }

    #[test]
    fn test_ids_are_sequential() {
        let ids = i64_values(&sample(), "ID");
        assert_eq!(ids, (1..=100).collect::<Vec<i64>>());
    }

    #[test]
    fn test_values_within_ranges() {
        let df = sample();
        assert!(i64_values(&df, "Age").iter().all(|a| (18..80).contains(a)));
        assert!(i64_values(&df, "Income")
            .iter()
            .all(|i| (20_000..150_000).contains(i)));

        let scores = df.column("Score").expect("Score").f64().expect("f64");
        assert_eq!(scores.null_count(), 0);
        assert!(scores
            .into_no_null_iter()
            .all(|s| (0.0..=100.0).contains(&s)));
    }

    #[test]
    fn test_seed_is_reproducible() {
        assert!(sample().equals(&sample()));
    }
}
