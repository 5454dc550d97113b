use serde::Serialize;

use crate::{
    StatsError, class_count, data_kind::DataKind, descriptive::SummaryStatistics, frequency,
    interval::{self, ClassInterval},
};

/// A complete grouped frequency-distribution table.
///
/// This structure combines everything a presentation layer needs:
/// - The data kind, which selects integer or decimal display
/// - Summary statistics of the raw observations
/// - The class intervals with all frequency measures filled in
///
/// # Examples
///
/// ```
/// use freqtable_stats::table::FrequencyTable;
///
/// let table = FrequencyTable::new(&[1.5, 2.0, 2.5, 3.0, 9.75]).unwrap();
/// assert_eq!(table.total, 5);
/// assert_eq!(table.intervals.len(), table.class_count);
/// assert_eq!(table.intervals.iter().map(|i| i.absolute_frequency).sum::<usize>(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    /// Whether the observations are discrete or continuous.
    pub kind: DataKind,
    /// Summary statistics of the observations.
    pub stats: SummaryStatistics,
    /// Number of classes given by Sturges' rule.
    ///
    /// This can exceed `intervals.len()` when every observation has the same value.
    pub class_count: usize,
    /// Class intervals in ascending order, with frequencies populated.
    pub intervals: Vec<ClassInterval>,
    /// Total number of observations.
    pub total: usize,
}

impl FrequencyTable {
    /// Builds the frequency table of `values`.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyInput`] - if `values` is empty
    /// * [`StatsError::NonFiniteObservation`] - if any value is `NaN` or infinite
    /// * [`StatsError::UnclassifiedObservation`] - if interval construction
    ///   failed to cover an observation
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        let stats = SummaryStatistics::new(values)?;
        let kind = DataKind::classify(values);
        let class_count = class_count::sturges(values.len())?;

        let mut intervals = interval::build_intervals(stats.min, stats.max, class_count, kind);
        frequency::aggregate(values, &mut intervals)?;

        Ok(Self {
            kind,
            stats,
            class_count,
            intervals,
            total: values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_table_invariants(values: &[f64], table: &FrequencyTable) {
        let sum = table
            .intervals
            .iter()
            .map(|i| i.absolute_frequency)
            .sum::<usize>();
        assert_eq!(sum, values.len());

        for pair in table.intervals.windows(2) {
            assert_eq!(pair[0].upper_bound.to_bits(), pair[1].lower_bound.to_bits());
        }

        let last = table.intervals.last().unwrap();
        assert!(last.is_last_class);
        assert_eq!(
            table.intervals.iter().filter(|i| i.is_last_class).count(),
            1
        );
        assert_eq!(last.cumulative_absolute, values.len());
        assert!((last.cumulative_percentage - 100.0).abs() < 1e-9);

        for &value in values {
            let matches = table.intervals.iter().filter(|i| i.contains(value)).count();
            assert_eq!(matches, 1, "value {value} matched {matches} intervals");
        }
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(FrequencyTable::new(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(
            FrequencyTable::new(&[f64::INFINITY, 1.0]).unwrap_err(),
            StatsError::NonFiniteObservation {
                value: f64::INFINITY
            }
        );
        assert!(matches!(
            FrequencyTable::new(&[2.0, f64::NAN, 1.0]),
            Err(StatsError::NonFiniteObservation { value }) if value.is_nan()
        ));
    }

    #[test]
    fn test_discrete_scenario() {
        let values = [2.0, 3.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0, 8.0];
        let table = FrequencyTable::new(&values).unwrap();

        assert_eq!(table.kind, DataKind::Discrete);
        assert_eq!(table.class_count, 4);
        assert_eq!(table.total, 10);
        let labels = table
            .intervals
            .iter()
            .map(|i| i.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["2 |- 3", "3 |- 5", "5 |- 6", "6 |-| 8"]);
        let counts = table
            .intervals
            .iter()
            .map(|i| i.absolute_frequency)
            .collect::<Vec<_>>();
        assert_eq!(counts, [3, 1, 4, 2]);
        assert_table_invariants(&values, &table);
    }

    #[test]
    fn test_all_values_equal() {
        let values = [5.0; 10];
        let table = FrequencyTable::new(&values).unwrap();
        assert_eq!(table.class_count, 4);
        assert_eq!(table.intervals.len(), 1);
        assert_eq!(table.intervals[0].label, "5 |-| 5");
        assert_table_invariants(&values, &table);
    }

    #[test]
    fn test_single_observation() {
        let values = [3.25];
        let table = FrequencyTable::new(&values).unwrap();
        assert_eq!(table.kind, DataKind::Continuous);
        assert_eq!(table.class_count, 1);
        assert_eq!(table.intervals[0].label, "3.25 |-| 3.25");
        assert_table_invariants(&values, &table);
    }

    #[test]
    fn test_narrow_range_many_classes() {
        // width rounds up to 0.1, so the trailing classes start past max
        let values = (0..100).map(|v| f64::from(v % 3) * 0.05).collect::<Vec<_>>();
        let table = FrequencyTable::new(&values).unwrap();
        assert_eq!(table.class_count, 8);
        assert_table_invariants(&values, &table);
    }

    #[test]
    fn test_generated_datasets() {
        let datasets: Vec<Vec<f64>> = vec![
            (1..=37).map(f64::from).collect(),
            (0..250).map(|v| (f64::from(v) * 7.31).sin() * 40.0).collect(),
            (0..64).map(|v| f64::from(v * v % 97) - 50.0).collect(),
            vec![-0.5, 0.0, 0.5],
            vec![1e-3, 2e-3, 3e-3, 4e-3],
            vec![1_000_000.0, 1_000_000.5, 999_999.25],
        ];
        for values in &datasets {
            let table = FrequencyTable::new(values).unwrap();
            assert_table_invariants(values, &table);
        }
    }

    #[test]
    fn test_serialize() {
        let table = FrequencyTable::new(&[1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["kind"], "Discrete");
        assert_eq!(json["total"], 3);
        assert_eq!(json["stats"]["median"], 2.0);
        // k = 3, width = 0.7: [1, 1.7), [1.7, 2.4), [2.4, 3]
        assert_eq!(json["intervals"][0]["label"], "1 |- 1");
        assert_eq!(json["intervals"][1]["is_last_class"], false);
        assert_eq!(json["intervals"][2]["is_last_class"], true);
    }
}
