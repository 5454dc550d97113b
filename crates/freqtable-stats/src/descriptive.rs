use serde::Serialize;

use crate::StatsError;

/// Summary statistics of an observation set.
///
/// This structure holds the measures of position and dispersion that are
/// printed next to a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// The number of observations.
    pub count: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// The total amplitude (`max - min`).
    pub amplitude: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median value.
    ///
    /// For an even number of observations this is the average of the two central values.
    pub median: f64,
    /// The population standard deviation (squared deviations divided by `count`).
    pub std_dev: f64,
}

impl SummaryStatistics {
    /// Computes summary statistics from unsorted values.
    ///
    /// The values are copied and sorted internally.
    ///
    /// # Arguments
    ///
    /// * `values` - The observations, in any order.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyInput`] - if `values` is empty
    /// * [`StatsError::NonFiniteObservation`] - if any value is `NaN` or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqtable_stats::descriptive::SummaryStatistics;
    /// let stats = SummaryStatistics::new(&[5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.amplitude, 4.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes summary statistics from pre-sorted values.
    ///
    /// Use this when the values are already sorted to skip the copy and sort.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyInput`] - if `sorted_values` is empty
    /// * [`StatsError::NonFiniteObservation`] - if any value is `NaN` or infinite
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqtable_stats::descriptive::SummaryStatistics;
    /// let stats = SummaryStatistics::from_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        // Must run before the sortedness assert, which NaN fails
        if let Some(&value) = sorted_values.iter().find(|v| !v.is_finite()) {
            return Err(StatsError::NonFiniteObservation { value });
        }
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(StatsError::EmptyInput);
        };
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let mid = count / 2;
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
        } else {
            sorted_values[mid]
        };
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;

        Ok(Self {
            count,
            min,
            max,
            amplitude: max - min,
            mean,
            median,
            std_dev: variance.sqrt(),
        })
    }
}
