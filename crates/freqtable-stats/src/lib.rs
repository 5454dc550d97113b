//! Grouped frequency-distribution tables for numeric observations.
//!
//! This crate turns a list of numbers into a classic class-interval table:
//!
//! - **Data kind**: Detect whether the observations are discrete (all integral) or continuous
//! - **Descriptive statistics**: Min, max, amplitude, mean, median and population standard deviation
//! - **Class count**: Choose the number of classes with Sturges' rule
//! - **Class intervals**: Partition `[min, max]` into contiguous intervals with a width rounded up to a tenth
//! - **Frequencies**: Absolute, cumulative, relative, percentage and cumulative percentage per interval
//! - **Frequency table**: The whole pipeline in one value, ready to be rendered
//!
//! # Modules
//!
//! - [`data_kind`]: Discrete/continuous classification
//! - [`descriptive`]: Summary statistics
//! - [`class_count`]: Sturges' rule
//! - [`interval`]: Class interval construction and labelling
//! - [`frequency`]: Frequency aggregation over class intervals
//! - [`table`]: The full pipeline
//!
//! # Examples
//!
//! ## Building a frequency table
//!
//! ```
//! use freqtable_stats::{data_kind::DataKind, table::FrequencyTable};
//!
//! let values = [2.0, 3.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0, 8.0];
//! let table = FrequencyTable::new(&values).unwrap();
//!
//! assert_eq!(table.kind, DataKind::Discrete);
//! assert_eq!(table.class_count, 4);
//! let counts = table.intervals.iter().map(|i| i.absolute_frequency).collect::<Vec<_>>();
//! assert_eq!(counts, [3, 1, 4, 2]);
//! ```
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use freqtable_stats::descriptive::SummaryStatistics;
//!
//! let stats = SummaryStatistics::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.std_dev, 2.0);
//! ```
//!
//! ## Building intervals by hand
//!
//! ```
//! use freqtable_stats::{data_kind::DataKind, frequency, interval};
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! let mut intervals = interval::build_intervals(1.0, 4.0, 2, DataKind::Discrete);
//! frequency::aggregate(&values, &mut intervals).unwrap();
//! assert_eq!(intervals[1].cumulative_absolute, 4);
//! ```

pub mod class_count;
pub mod data_kind;
pub mod descriptive;
pub mod frequency;
pub mod interval;
pub mod table;

/// Errors produced while computing a frequency table.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The observation set was empty.
    #[display("no observations to analyze")]
    EmptyInput,
    /// An observation was `NaN` or infinite.
    #[display("observation {value} is not a finite number")]
    NonFiniteObservation {
        #[error(not(source))]
        value: f64,
    },
    /// An observation matched none of the constructed class intervals.
    ///
    /// This means the interval construction is broken; it is not caused by user input.
    #[display("observation {value} does not fall in any class interval")]
    UnclassifiedObservation {
        #[error(not(source))]
        value: f64,
    },
}
