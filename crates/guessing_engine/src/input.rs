//! Boundary validation for raw guess text.

use tracing::{debug, instrument};

use crate::GuessError;

/// Parses raw text-field contents into a guess value.
///
/// Surrounding whitespace is ignored; a leading sign is accepted.
///
/// # Errors
///
/// Returns [`GuessError::NotANumber`] if the text is not an integer.
#[instrument]
pub fn parse_guess(text: &str) -> Result<i64, GuessError> {
    text.trim().parse::<i64>().map_err(|e| {
        debug!(error = %e, "Guess is not a number");
        GuessError::NotANumber {
            input: text.to_string(),
        }
    })
}
