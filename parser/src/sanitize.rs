//! Quote stripping for flag values.

use crate::error::ParseError;

const QUOTE_DOUBLE: char = '"';
const QUOTE_SINGLE: char = '\'';

/// Removes one matching pair of enclosing quotes from a flag value.
///
/// Double quotes are checked before single quotes, and only one level is
/// stripped; a value that is quoted twice keeps its inner pair. A value
/// that starts or ends with a quote without being enclosed by the pair is
/// rejected.
///
/// # Errors
///
/// Returns [`ParseError::UnevenQuotes`] for an unbalanced leading or
/// trailing quote.
///
/// # Examples
///
/// ```
/// use argbind_parser::sanitize_value;
///
/// assert_eq!(sanitize_value("report.csv").unwrap(), "report.csv");
/// assert_eq!(sanitize_value("\"report.csv\"").unwrap(), "report.csv");
/// assert_eq!(sanitize_value("'report.csv'").unwrap(), "report.csv");
/// assert!(sanitize_value("\"report.csv").is_err());
/// ```
pub fn sanitize_value(value: &str) -> Result<&str, ParseError> {
    if is_enclosed_in(value, QUOTE_DOUBLE) {
        return Ok(trim_enclosing(value));
    }

    if value.starts_with(QUOTE_DOUBLE) || value.ends_with(QUOTE_DOUBLE) {
        return Err(ParseError::UnevenQuotes(value.to_string()));
    }

    if is_enclosed_in(value, QUOTE_SINGLE) {
        return Ok(trim_enclosing(value));
    }

    if value.starts_with(QUOTE_SINGLE) || value.ends_with(QUOTE_SINGLE) {
        return Err(ParseError::UnevenQuotes(value.to_string()));
    }

    Ok(value)
}

fn is_enclosed_in(value: &str, quote: char) -> bool {
    value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote)
}

fn trim_enclosing(value: &str) -> &str {
    // Both quote characters are one byte, so the slice bounds are safe.
    &value[1..value.len() - 1]
}
