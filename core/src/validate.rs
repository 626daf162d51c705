//! Scheme-definition validation.
//!
//! Name rules are enforced when a scheme is built, never during parsing: a
//! malformed definition fails before any argument is looked at.
//!
//! # Examples
//!
//! ```
//! use argbind_core::{SchemeError, validate_long_name, validate_short_name};
//!
//! assert_eq!(validate_short_name("d"), Ok('d'));
//! assert_eq!(
//!     validate_short_name("de"),
//!     Err(SchemeError::InvalidShortName("de".to_string()))
//! );
//!
//! // Long names are normalized to lowercase for case-insensitive matching.
//! assert_eq!(validate_long_name("DEBUG"), Ok("debug".to_string()));
//! ```

use thiserror::Error;

/// Scheme-definition errors, raised at build time.
///
/// Any of these makes the whole scheme unusable; parsing must not proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// Short name is not exactly one character.
    #[error("short name `{0}` must be exactly one character")]
    InvalidShortName(String),
    /// Long name is exactly one character; single characters must use the
    /// short form.
    #[error("long name `{0}` cannot be a single character")]
    InvalidLongName(String),
    /// Neither a short nor a long name was supplied.
    #[error("capability `{capability}` must define a short and/or long name")]
    MissingName {
        /// Capability the entry was registered under.
        capability: String,
    },
    /// Capability name is empty or whitespace-only, leaving the handler
    /// without an identity.
    #[error("capability name cannot be empty")]
    MissingCapabilityName,
}

/// Validates a short name and returns it as its single character.
pub fn validate_short_name(short: &str) -> Result<char, SchemeError> {
    let mut chars = short.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SchemeError::InvalidShortName(short.to_string())),
    }
}

/// Validates a long name and returns its normalized (lower-cased) spelling.
pub fn validate_long_name(long: &str) -> Result<String, SchemeError> {
    if long.chars().count() == 1 {
        return Err(SchemeError::InvalidLongName(long.to_string()));
    }

    Ok(long.to_lowercase())
}

/// Validates a capability name.
pub fn validate_capability_name(name: &str) -> Result<String, SchemeError> {
    if name.trim().is_empty() {
        return Err(SchemeError::MissingCapabilityName);
    }

    Ok(name.to_string())
}
