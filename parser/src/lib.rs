//! Argument parsing and dispatch against declarative schemes.
//!
//! This crate turns a raw argument sequence into matched, deduplicated
//! [`ParsedArgument`]s and invokes the bound handlers. It recognizes three
//! token syntaxes per whitespace-delimited segment, classified in this
//! order:
//!
//! 1. Java-style properties: `-Dname`, `-Dname=value`
//! 2. GNU long flags: `--name`, `--name=value`
//! 3. POSIX short clusters: `-x`, `-xyz` (each character independent)
//!
//! Matching is first-declared-wins over the scheme; unknown candidates are
//! dropped silently. Flag values pass through [`sanitize_value`], which
//! strips one pair of balanced enclosing quotes.
//!
//! # Main entry points
//!
//! - [`parse`] — match raw arguments against a scheme without side effects.
//! - [`dispatch`] — invoke handlers for an already-parsed collection.
//! - [`process`] — parse then dispatch in one call, all-or-nothing with
//!   respect to the parse pass.
//!
//! # Example
//!
//! ```
//! use argbind_core::{ArgumentSpec, SchemeBuilder};
//! use argbind_parser::process;
//!
//! #[derive(Default)]
//! struct App {
//!     debug: bool,
//!     configuration_file: Option<String>,
//! }
//!
//! let scheme = SchemeBuilder::new()
//!     .flag(
//!         ArgumentSpec::new("debug").with_short("d").with_long("debug"),
//!         |app: &mut App| {
//!             app.debug = true;
//!             Ok(())
//!         },
//!     )
//!     .value(
//!         ArgumentSpec::new("configuration-file").with_long("configuration-file"),
//!         |app, value| {
//!             app.configuration_file = Some(value.to_string());
//!             Ok(())
//!         },
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut app = App::default();
//! process(&mut app, &scheme, &["-d", "--configuration-file=app.json"]).unwrap();
//!
//! assert!(app.debug);
//! assert_eq!(app.configuration_file.as_deref(), Some("app.json"));
//! ```

mod dispatch;
mod error;
mod parse;
mod sanitize;
mod token;

pub use dispatch::dispatch;
pub use error::{DispatchError, ParseError, ProcessError};
pub use parse::ArgumentParser;
pub use sanitize::sanitize_value;

use argbind_core::{ParsedArgument, Scheme};

/// Parses raw arguments against a scheme.
///
/// Returns the deduplicated, insertion-ordered collection of matched
/// arguments. Empty arguments or an empty scheme yield an empty collection.
///
/// # Errors
///
/// Returns [`ParseError::UnevenQuotes`] when a matched flag value has an
/// unbalanced quote; earlier matches are discarded.
///
/// # Examples
///
/// ```
/// use argbind_core::{ArgumentSpec, SchemeBuilder};
/// use argbind_parser::parse;
///
/// struct App;
///
/// let scheme = SchemeBuilder::new()
///     .value(
///         ArgumentSpec::new("file").with_long("file"),
///         |_: &mut App, _| Ok(()),
///     )
///     .build()
///     .unwrap();
///
/// let parsed = parse(&scheme, &["--file=report.csv", "--unknown"]).unwrap();
/// assert_eq!(parsed.len(), 1);
/// assert_eq!(parsed[0].value(), Some("report.csv"));
/// ```
pub fn parse<'s, T, S: AsRef<str>>(
    scheme: &'s Scheme<T>,
    arguments: &[S],
) -> Result<Vec<ParsedArgument<'s, T>>, ParseError> {
    ArgumentParser::new(arguments, scheme).parse()
}

/// Parses raw arguments and dispatches the matched handlers against the
/// target.
///
/// Dispatch happens only after the whole parse pass succeeds: a parse
/// failure means no handler runs at all.
///
/// # Errors
///
/// Returns [`ProcessError::Parse`] when parsing fails and
/// [`ProcessError::Dispatch`] when a handler fails (fail-fast).
pub fn process<T, S: AsRef<str>>(
    target: &mut T,
    scheme: &Scheme<T>,
    arguments: &[S],
) -> Result<(), ProcessError> {
    let parsed = parse(scheme, arguments)?;
    dispatch(target, &parsed)?;

    Ok(())
}
