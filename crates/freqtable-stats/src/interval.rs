//! Class interval construction
//!
//! The observed range `[min, max]` is split into `k` contiguous intervals of a
//! common width. The width is rounded **up** to the nearest tenth so that the
//! intervals have short, readable bounds and always cover the whole range:
//!
//! ```text
//! class_width = ceil(((max - min) / k) * 10) / 10
//! ```
//!
//! # Inclusion rule
//!
//! Every interval except the last one is half-open (`lower <= x < upper`,
//! written `a |- b`). The last interval is closed (`lower <= x <= upper`,
//! written `a |-| b`) and its upper bound is forced to `max`, so the maximum
//! observation is always counted exactly once.
//!
//! # Examples
//!
//! ```
//! use freqtable_stats::{data_kind::DataKind, interval::build_intervals};
//!
//! let intervals = build_intervals(2.0, 8.0, 4, DataKind::Continuous);
//! let labels = intervals.iter().map(|i| i.label.as_str()).collect::<Vec<_>>();
//! assert_eq!(
//!     labels,
//!     ["2.00 |- 3.50", "3.50 |- 5.00", "5.00 |- 6.50", "6.50 |-| 8.00"]
//! );
//! ```

use std::fmt;

use serde::Serialize;

use crate::data_kind::DataKind;

/// A single class interval of a frequency table.
///
/// The bounds and the last-class flag are fixed by [`build_intervals`]. The
/// frequency fields start at zero and are filled in by
/// [`frequency::aggregate`](crate::frequency::aggregate).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassInterval {
    /// Display label, e.g. `2 |- 4` or `6.50 |-| 8.00`.
    pub label: String,
    /// Lower bound, always included.
    pub lower_bound: f64,
    /// Upper bound, included only for the last class.
    pub upper_bound: f64,
    /// Whether this is the last (closed) class.
    pub is_last_class: bool,
    /// Number of observations in this interval (Fi).
    pub absolute_frequency: usize,
    /// Running total of absolute frequencies up to this interval (Fac).
    pub cumulative_absolute: usize,
    /// Fraction of all observations in this interval (Fr).
    pub relative_frequency: f64,
    /// Running total of relative frequencies (Frac).
    pub cumulative_relative: f64,
    /// Relative frequency as a percentage (F%).
    pub percentage_frequency: f64,
    /// Running total of percentage frequencies (F%ac).
    pub cumulative_percentage: f64,
}

impl ClassInterval {
    /// Creates an interval with all frequencies set to zero.
    #[must_use]
    pub fn new(lower_bound: f64, upper_bound: f64, is_last_class: bool, kind: DataKind) -> Self {
        let label = IntervalLabel {
            lower_bound,
            upper_bound,
            is_last_class,
            kind,
        }
        .to_string();
        Self {
            label,
            lower_bound,
            upper_bound,
            is_last_class,
            absolute_frequency: 0,
            cumulative_absolute: 0,
            relative_frequency: 0.0,
            cumulative_relative: 0.0,
            percentage_frequency: 0.0,
            cumulative_percentage: 0.0,
        }
    }

    /// Returns the class midpoint, `(lower_bound + upper_bound) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.lower_bound, self.upper_bound)
    }

    /// Returns `true` if `value` belongs to this interval.
    ///
    /// The upper bound is included only when this is the last class.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqtable_stats::{data_kind::DataKind, interval::ClassInterval};
    /// let open = ClassInterval::new(1.0, 2.0, false, DataKind::Discrete);
    /// assert!(open.contains(1.0));
    /// assert!(!open.contains(2.0));
    ///
    /// let closed = ClassInterval::new(1.0, 2.0, true, DataKind::Discrete);
    /// assert!(closed.contains(2.0));
    /// ```
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if self.is_last_class {
            self.lower_bound <= value && value <= self.upper_bound
        } else {
            self.lower_bound <= value && value < self.upper_bound
        }
    }
}

/// Formats interval bounds according to the data kind and inclusion rule.
#[derive(Debug, Clone, Copy)]
struct IntervalLabel {
    lower_bound: f64,
    upper_bound: f64,
    is_last_class: bool,
    kind: DataKind,
}

impl fmt::Display for IntervalLabel {
    #[expect(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_last_class { "|-|" } else { "|-" };
        match self.kind {
            // Discrete bounds are truncated toward zero, not rounded.
            DataKind::Discrete => write!(
                f,
                "{} {separator} {}",
                self.lower_bound.trunc() as i64,
                self.upper_bound.trunc() as i64
            ),
            DataKind::Continuous => write!(
                f,
                "{:.2} {separator} {:.2}",
                self.lower_bound, self.upper_bound
            ),
        }
    }
}

/// Computes the common class width, rounded up to the nearest tenth.
///
/// # Examples
///
/// ```
/// # use freqtable_stats::interval::class_width;
/// assert_eq!(class_width(6.0, 4), 1.5);
/// assert_eq!(class_width(10.0, 3), 3.4);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn class_width(total_range: f64, class_count: usize) -> f64 {
    let raw_width = total_range / class_count as f64;
    (raw_width * 10.0).ceil() / 10.0
}

/// Builds `class_count` contiguous class intervals covering `[min, max]`.
///
/// Each interval's lower bound is the previous interval's upper bound, the
/// first lower bound is `min`, and the last upper bound is `max`. When
/// `min == max` a single closed interval `[min, max]` is returned whatever the
/// requested class count.
///
/// # Arguments
///
/// * `min` - Smallest observation
/// * `max` - Largest observation
/// * `class_count` - Number of classes, usually from [`sturges`](crate::class_count::sturges)
/// * `kind` - Data kind, used for the interval labels
///
/// # Panics
///
/// Panics if `class_count` is zero or `min > max`.
///
/// # Examples
///
/// ```
/// use freqtable_stats::{data_kind::DataKind, interval::build_intervals};
///
/// let intervals = build_intervals(5.0, 5.0, 4, DataKind::Discrete);
/// assert_eq!(intervals.len(), 1);
/// assert_eq!(intervals[0].label, "5 |-| 5");
/// assert!(intervals[0].is_last_class);
/// ```
#[must_use]
pub fn build_intervals(
    min: f64,
    max: f64,
    class_count: usize,
    kind: DataKind,
) -> Vec<ClassInterval> {
    assert!(class_count >= 1, "class count must be at least 1");
    assert!(min <= max, "min must not exceed max");

    let total_range = max - min;
    if total_range == 0.0 {
        return vec![ClassInterval::new(min, max, true, kind)];
    }

    let width = class_width(total_range, class_count);
    tracing::debug!(min, max, class_count, width, "building class intervals");

    let mut intervals = Vec::with_capacity(class_count);
    let mut lower_bound = min;
    for idx in 0..class_count {
        let is_last_class = idx == class_count - 1;
        let upper_bound = if is_last_class {
            max
        } else {
            lower_bound + width
        };
        intervals.push(ClassInterval::new(
            lower_bound,
            upper_bound,
            is_last_class,
            kind,
        ));
        lower_bound = upper_bound;
    }
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(intervals: &[ClassInterval]) -> Vec<(f64, f64)> {
        intervals
            .iter()
            .map(|i| (i.lower_bound, i.upper_bound))
            .collect()
    }

    #[test]
    fn test_class_width_rounds_up_to_tenth() {
        assert!((class_width(6.0, 4) - 1.5).abs() < f64::EPSILON);
        assert!((class_width(10.0, 3) - 3.4).abs() < f64::EPSILON);
        assert!((class_width(1.0, 8) - 0.2).abs() < f64::EPSILON);
        // Already a whole number of tenths: no extra rounding
        assert!((class_width(8.0, 4) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_discrete_scenario() {
        let intervals = build_intervals(2.0, 8.0, 4, DataKind::Discrete);
        assert_eq!(
            bounds(&intervals),
            [(2.0, 3.5), (3.5, 5.0), (5.0, 6.5), (6.5, 8.0)]
        );
        let labels = intervals.iter().map(|i| i.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["2 |- 3", "3 |- 5", "5 |- 6", "6 |-| 8"]);
    }

    #[test]
    fn test_exactly_one_last_class() {
        let intervals = build_intervals(0.0, 97.3, 7, DataKind::Continuous);
        assert_eq!(intervals.len(), 7);
        let last_flags = intervals.iter().filter(|i| i.is_last_class).count();
        assert_eq!(last_flags, 1);
        assert!(intervals.last().unwrap().is_last_class);
    }

    #[test]
    fn test_contiguous_and_covering() {
        let intervals = build_intervals(-3.7, 12.15, 6, DataKind::Continuous);
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].upper_bound.to_bits(), pair[1].lower_bound.to_bits());
        }
        assert_eq!(intervals.first().unwrap().lower_bound.to_bits(), (-3.7f64).to_bits());
        assert_eq!(intervals.last().unwrap().upper_bound.to_bits(), 12.15f64.to_bits());
    }

    #[test]
    fn test_last_upper_bound_forced_to_max() {
        // width = ceil(10 / 3 * 10) / 10 = 3.4, so 3 * 3.4 would overshoot 10
        let intervals = build_intervals(0.0, 10.0, 3, DataKind::Discrete);
        let (lower, upper) = (intervals[2].lower_bound, intervals[2].upper_bound);
        assert!((lower - 6.8).abs() < 1e-12);
        assert!((upper - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_class() {
        let intervals = build_intervals(1.0, 9.0, 1, DataKind::Discrete);
        assert_eq!(bounds(&intervals), [(1.0, 9.0)]);
        assert!(intervals[0].is_last_class);
        assert_eq!(intervals[0].label, "1 |-| 9");
    }

    #[test]
    fn test_degenerate_range() {
        let intervals = build_intervals(5.0, 5.0, 4, DataKind::Discrete);
        assert_eq!(bounds(&intervals), [(5.0, 5.0)]);
        assert!(intervals[0].is_last_class);
        assert!(intervals[0].contains(5.0));
    }

    #[test]
    fn test_continuous_labels() {
        let intervals = build_intervals(1.25, 2.0, 2, DataKind::Continuous);
        let labels = intervals.iter().map(|i| i.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["1.25 |- 1.65", "1.65 |-| 2.00"]);
    }

    #[test]
    fn test_discrete_labels_truncate_toward_zero() {
        let intervals = build_intervals(-6.0, 0.0, 4, DataKind::Discrete);
        // bounds: -6, -4.5, -3, -1.5, 0
        let labels = intervals.iter().map(|i| i.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["-6 |- -4", "-4 |- -3", "-3 |- -1", "-1 |-| 0"]);
    }

    #[test]
    fn test_midpoint() {
        let interval = ClassInterval::new(2.0, 3.5, false, DataKind::Discrete);
        assert!((interval.midpoint() - 2.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frequencies_start_at_zero() {
        for interval in build_intervals(0.0, 1.0, 3, DataKind::Continuous) {
            assert_eq!(interval.absolute_frequency, 0);
            assert_eq!(interval.cumulative_absolute, 0);
            assert!(interval.relative_frequency.abs() < f64::EPSILON);
            assert!(interval.cumulative_percentage.abs() < f64::EPSILON);
        }
    }

    #[test]
    #[should_panic(expected = "class count must be at least 1")]
    fn test_zero_class_count() {
        let _ = build_intervals(0.0, 1.0, 0, DataKind::Discrete);
    }
}
