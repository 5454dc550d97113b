//! Number of class intervals for a sample size
//!
//! Uses Sturges' rule in its common textbook form:
//!
//! ```text
//! k = round(1 + 3.3 * log10(n))
//! ```
//!
//! Rounding is [`f64::round`], so an exact half rounds away from zero
//! (`4.5` becomes `5`).

use crate::StatsError;

/// Computes the number of classes for `sample_size` observations.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `sample_size` is zero.
///
/// # Examples
///
/// ```
/// use freqtable_stats::class_count::sturges;
///
/// assert_eq!(sturges(1), Ok(1));
/// assert_eq!(sturges(10), Ok(4));
/// assert_eq!(sturges(100), Ok(8));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sturges(sample_size: usize) -> Result<usize, StatsError> {
    if sample_size == 0 {
        return Err(StatsError::EmptyInput);
    }
    Ok(round_class_count(1.0 + 3.3 * (sample_size as f64).log10()))
}

/// Rounds a fractional class count to the nearest integer, halves away from zero.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_class_count(raw: f64) -> usize {
    raw.round() as usize
}
