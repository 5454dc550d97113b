//! Parsing of raw observation text
//!
//! Observations are separated by commas when the text contains at least one
//! comma, and by whitespace otherwise. Empty fragments are skipped, so
//! trailing separators are harmless.

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseObservationsError {
    #[display("no observations found in input")]
    Empty,
    #[display("invalid number '{fragment}'")]
    InvalidNumber {
        #[error(not(source))]
        fragment: String,
    },
    #[display("observation '{fragment}' is not a finite number")]
    NonFinite {
        #[error(not(source))]
        fragment: String,
    },
}

/// Parse a comma- or whitespace-separated list of numbers
pub fn parse_observations(text: &str) -> Result<Vec<f64>, ParseObservationsError> {
    let values = if text.contains(',') {
        parse_fragments(text.split(',').map(str::trim))?
    } else {
        parse_fragments(text.split_whitespace())?
    };

    if values.is_empty() {
        return Err(ParseObservationsError::Empty);
    }
    Ok(values)
}

fn parse_fragments<'a, I>(fragments: I) -> Result<Vec<f64>, ParseObservationsError>
where
    I: Iterator<Item = &'a str>,
{
    fragments
        .filter(|fragment| !fragment.is_empty())
        .map(parse_fragment)
        .collect()
}

fn parse_fragment(fragment: &str) -> Result<f64, ParseObservationsError> {
    let value = fragment
        .parse::<f64>()
        .map_err(|_| ParseObservationsError::InvalidNumber {
            fragment: fragment.to_owned(),
        })?;
    if !value.is_finite() {
        return Err(ParseObservationsError::NonFinite {
            fragment: fragment.to_owned(),
        });
    }
    Ok(value)
}
