use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a string into a [`Decimal`].
///
/// Accepts plain (`"1234.56"`) and scientific (`"1.5e3"`) notation after
/// trimming whitespace. Digit separators (`,` or `_`) are rejected. Empty or
/// whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let invalid = |source: rust_decimal::Error| ParseDecimalError {
        input: s.to_string(),
        source,
    };
    // rust_decimal skips '_' between digits; the form does not.
    if trimmed.contains('_') {
        return Err(invalid(rust_decimal::Error::from("digit separators are not accepted")));
    }
    Decimal::from_str(trimmed)
        .or_else(|e| Decimal::from_scientific(trimmed).map_err(|_| e))
        .map_err(invalid)
}

/// Parses form text into a [`Decimal`], treating anything unparsable as 0.
///
/// The user never sees an error for bad input; the tax label simply shows zero.
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    parse_decimal(s).unwrap_or_else(|e| {
        tracing::debug!("coercing to zero: {}", e);
        Decimal::ZERO
    })
}
