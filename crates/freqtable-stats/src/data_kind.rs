use serde::Serialize;

/// Whether a set of observations is made of whole numbers or not.
///
/// The kind drives how interval bounds are displayed: discrete data shows
/// integer bounds, continuous data shows two decimal places.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum DataKind {
    /// Every observation has a zero fractional part.
    Discrete,
    /// At least one observation has a non-zero fractional part.
    Continuous,
}

impl DataKind {
    /// Classifies a set of observations.
    ///
    /// An empty set is classified as [`DataKind::Discrete`]; callers that need
    /// a non-empty set check it beforehand.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqtable_stats::data_kind::DataKind;
    /// assert_eq!(DataKind::classify(&[1.0, 2.0, 3.0]), DataKind::Discrete);
    /// assert_eq!(DataKind::classify(&[1.5, 2.0, 3.0]), DataKind::Continuous);
    /// ```
    #[must_use]
    pub fn classify(values: &[f64]) -> Self {
        if values.iter().any(|v| v.fract() != 0.0) {
            Self::Continuous
        } else {
            Self::Discrete
        }
    }
}
