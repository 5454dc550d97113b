//! Frequency aggregation over class intervals
//!
//! Aggregation runs in two passes:
//!
//! 1. [`tally`] assigns every observation to the first interval that contains
//!    it and counts the absolute frequency.
//! 2. [`accumulate`] sweeps the intervals once from left to right and derives
//!    the cumulative, relative and percentage measures from the counts.
//!
//! [`aggregate`] runs both passes.

use crate::{StatsError, interval::ClassInterval};

/// Runs [`tally`] followed by [`accumulate`].
///
/// # Errors
///
/// Returns [`StatsError::UnclassifiedObservation`] if an observation falls in no interval.
///
/// # Examples
///
/// ```
/// use freqtable_stats::{data_kind::DataKind, frequency, interval};
///
/// let values = [2.0, 3.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0, 8.0];
/// let mut intervals = interval::build_intervals(2.0, 8.0, 4, DataKind::Discrete);
/// frequency::aggregate(&values, &mut intervals).unwrap();
///
/// let last = intervals.last().unwrap();
/// assert_eq!(last.cumulative_absolute, 10);
/// assert!((last.cumulative_percentage - 100.0).abs() < 1e-9);
/// ```
pub fn aggregate(values: &[f64], intervals: &mut [ClassInterval]) -> Result<(), StatsError> {
    tally(values, intervals)?;
    accumulate(intervals, values.len());
    Ok(())
}

/// Counts the absolute frequency of each interval.
///
/// Intervals are scanned in order and each observation is counted in the first
/// one that [contains](ClassInterval::contains) it. Existing counts are added to,
/// not reset.
///
/// # Errors
///
/// Returns [`StatsError::UnclassifiedObservation`] for the first observation
/// that no interval contains. Intervals built by
/// [`build_intervals`](crate::interval::build_intervals) from the observations'
/// own extrema always cover every observation.
pub fn tally(values: &[f64], intervals: &mut [ClassInterval]) -> Result<(), StatsError> {
    for &value in values {
        let interval = intervals
            .iter_mut()
            .find(|interval| interval.contains(value))
            .ok_or(StatsError::UnclassifiedObservation { value })?;
        interval.absolute_frequency += 1;
    }
    Ok(())
}

/// Derives cumulative, relative and percentage frequencies from absolute counts.
///
/// # Arguments
///
/// * `intervals` - Intervals whose `absolute_frequency` has been tallied
/// * `total` - Total number of observations
///
/// # Panics
///
/// Panics if `total` is zero.
#[expect(clippy::cast_precision_loss)]
pub fn accumulate(intervals: &mut [ClassInterval], total: usize) {
    assert!(total > 0, "total observation count must be positive");

    let mut cumulative_absolute = 0;
    let mut cumulative_relative = 0.0;
    let mut cumulative_percentage = 0.0;

    for interval in intervals {
        cumulative_absolute += interval.absolute_frequency;
        interval.cumulative_absolute = cumulative_absolute;

        interval.relative_frequency = interval.absolute_frequency as f64 / total as f64;
        cumulative_relative += interval.relative_frequency;
        interval.cumulative_relative = cumulative_relative;

        interval.percentage_frequency = interval.relative_frequency * 100.0;
        cumulative_percentage += interval.percentage_frequency;
        interval.cumulative_percentage = cumulative_percentage;
    }
}
