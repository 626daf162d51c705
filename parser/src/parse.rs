//! Matching of raw arguments against a scheme.

use argbind_core::{ParsedArgument, Scheme};
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::sanitize::sanitize_value;
use crate::token::{self, Candidate};

/// Parses raw arguments against a predefined argument scheme.
///
/// The raw argument sequence is joined with single spaces and re-split on
/// spaces before classification. That means a value containing a literal
/// space fragments into separate tokens before the sanitizer ever sees it;
/// this is a documented boundary of the tokenization, not something the
/// parser repairs.
///
/// # Examples
///
/// ```
/// use argbind_core::{ArgumentSpec, SchemeBuilder};
/// use argbind_parser::ArgumentParser;
///
/// #[derive(Default)]
/// struct App {
///     debug: bool,
/// }
///
/// let scheme = SchemeBuilder::new()
///     .flag(
///         ArgumentSpec::new("debug").with_short("d").with_long("debug"),
///         |app: &mut App| {
///             app.debug = true;
///             Ok(())
///         },
///     )
///     .build()
///     .unwrap();
///
/// let parsed = ArgumentParser::new(&["-d", "-d"], &scheme).parse().unwrap();
/// assert_eq!(parsed.len(), 1); // repeated flags are idempotent
/// ```
pub struct ArgumentParser<'s, T> {
    arguments: String,
    scheme: &'s Scheme<T>,
}

impl<'s, T> ArgumentParser<'s, T> {
    /// Wraps a raw argument sequence and the scheme to match against.
    pub fn new<S: AsRef<str>>(arguments: &[S], scheme: &'s Scheme<T>) -> Self {
        let arguments = arguments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        Self { arguments, scheme }
    }

    /// Parses the arguments into a deduplicated, insertion-ordered
    /// collection of matched arguments.
    ///
    /// Empty arguments or an empty scheme yield an empty collection;
    /// candidates matching no entry are dropped silently.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnevenQuotes`] when a matched value fails
    /// sanitization; the whole parse is aborted and earlier matches are
    /// discarded.
    pub fn parse(&self) -> Result<Vec<ParsedArgument<'s, T>>, ParseError> {
        if self.scheme.is_empty() || self.arguments.is_empty() {
            return Ok(Vec::new());
        }

        let mut parsed = Vec::new();
        for segment in self.arguments.split(' ') {
            for candidate in token::candidates(segment) {
                self.collect(candidate, &mut parsed)?;
            }
        }

        debug!(count = parsed.len(), "parsed arguments against scheme");
        Ok(parsed)
    }

    fn collect(
        &self,
        candidate: Candidate,
        parsed: &mut Vec<ParsedArgument<'s, T>>,
    ) -> Result<(), ParseError> {
        let Some(entry) = self
            .scheme
            .find_match(&candidate.name, candidate.value.is_some())
        else {
            trace!(name = %candidate.name, "no scheme entry for candidate, dropping");
            return Ok(());
        };

        let value = match candidate.value.as_deref() {
            Some(raw) => Some(sanitize_value(raw)?.to_string()),
            None => None,
        };

        let argument = ParsedArgument::new(entry, value);
        if !parsed.contains(&argument) {
            parsed.push(argument);
        }

        Ok(())
    }
}
