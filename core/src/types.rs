//! Scheme type definitions for declarative argument binding.
//!
//! This module defines the data model shared by the builder and the parser:
//! the serializable [`ArgumentSpec`] declaration, the [`Handler`] capability
//! bound to a target instance, the validated [`SchemeEntry`], the ordered
//! [`Scheme`], and the [`ParsedArgument`] produced by matching.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::{
    SchemeError, validate_capability_name, validate_long_name, validate_short_name,
};

/// Error type returned by argument handlers.
///
/// Handlers are free to fail with any error; dispatch wraps the failure and
/// carries it as the cause.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Declaration of one argument capability.
///
/// A spec names a capability and optionally gives it a short form (one
/// character, matched exactly) and/or a long form (two or more characters,
/// matched case-insensitively). Validation of the names happens when the
/// scheme is built, not here.
///
/// Specs serialize with [`serde`], so flag declarations can live in
/// configuration files and be bound to handlers by capability name.
///
/// # Examples
///
/// ```
/// use argbind_core::ArgumentSpec;
///
/// let spec = ArgumentSpec::new("debug").with_short("d").with_long("debug");
/// assert_eq!(spec.name, "debug");
/// assert_eq!(spec.short.as_deref(), Some("d"));
/// assert_eq!(spec.long.as_deref(), Some("debug"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Capability name; also serves as the handler identity.
    pub name: String,
    /// Short form without the leading dash (e.g., "d").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Long form without the leading dashes (e.g., "debug").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

impl ArgumentSpec {
    /// Creates a spec with the given capability name and no flag names yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            long: None,
        }
    }

    /// Adds a short form.
    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    /// Adds a long form.
    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }
}

/// An invocable capability bound to a target of type `T`.
///
/// The variant carries the declared value arity: [`Handler::Flag`] takes no
/// value, [`Handler::Value`] takes exactly one string value.
///
/// # Examples
///
/// ```
/// use argbind_core::Handler;
///
/// struct App { debug: bool }
///
/// let handler = Handler::flag(|app: &mut App| {
///     app.debug = true;
///     Ok(())
/// });
/// assert_eq!(handler.arity(), 0);
///
/// let mut app = App { debug: false };
/// handler.invoke(&mut app, None).unwrap();
/// assert!(app.debug);
/// ```
pub enum Handler<T> {
    /// Zero-argument handler.
    Flag(Box<dyn Fn(&mut T) -> Result<(), HandlerError>>),
    /// Single string-argument handler.
    Value(Box<dyn Fn(&mut T, &str) -> Result<(), HandlerError>>),
}

impl<T> Handler<T> {
    /// Wraps a zero-argument closure.
    pub fn flag(f: impl Fn(&mut T) -> Result<(), HandlerError> + 'static) -> Self {
        Handler::Flag(Box::new(f))
    }

    /// Wraps a single string-argument closure.
    pub fn value(f: impl Fn(&mut T, &str) -> Result<(), HandlerError> + 'static) -> Self {
        Handler::Value(Box::new(f))
    }

    /// Number of value parameters this handler declares (0 or 1).
    pub fn arity(&self) -> usize {
        match self {
            Handler::Flag(_) => 0,
            Handler::Value(_) => 1,
        }
    }

    /// Invokes the handler against the target.
    ///
    /// The value must agree with the declared arity; a mismatch is reported
    /// as a handler error rather than a panic.
    pub fn invoke(&self, target: &mut T, value: Option<&str>) -> Result<(), HandlerError> {
        match (self, value) {
            (Handler::Flag(f), None) => f(target),
            (Handler::Value(f), Some(value)) => f(target, value),
            (Handler::Flag(_), Some(value)) => {
                Err(format!("handler takes no value, got `{value}`").into())
            }
            (Handler::Value(_), None) => Err("handler requires a value".into()),
        }
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Flag(_) => f.write_str("Handler::Flag"),
            Handler::Value(_) => f.write_str("Handler::Value"),
        }
    }
}

/// Validated definition of one flag in a scheme.
///
/// Built once per target, immutable afterward. The short form is matched
/// exactly; the long form is stored lower-cased and matched
/// case-insensitively. At least one of the two is always present.
///
/// Equality compares the capability name (handler identity), both flag
/// names, and the declared arity; the closure itself has no usable identity.
pub struct SchemeEntry<T> {
    name: String,
    short: Option<char>,
    long: Option<String>,
    handler: Handler<T>,
}

impl<T> SchemeEntry<T> {
    /// Validates a spec and binds it to a handler.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError`] when the capability name is empty, the short
    /// form is not exactly one character, the long form is exactly one
    /// character, or neither flag name is supplied. Empty-string flag names
    /// are treated as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use argbind_core::{ArgumentSpec, Handler, SchemeEntry, SchemeError};
    ///
    /// struct App;
    ///
    /// let entry = SchemeEntry::new(
    ///     ArgumentSpec::new("debug").with_short("d").with_long("debug"),
    ///     Handler::flag(|_: &mut App| Ok(())),
    /// )
    /// .unwrap();
    /// assert_eq!(entry.short(), Some('d'));
    /// assert_eq!(entry.long(), Some("debug"));
    ///
    /// let err = SchemeEntry::new(
    ///     ArgumentSpec::new("debug").with_short("de"),
    ///     Handler::flag(|_: &mut App| Ok(())),
    /// )
    /// .unwrap_err();
    /// assert_eq!(err, SchemeError::InvalidShortName("de".to_string()));
    /// ```
    pub fn new(spec: ArgumentSpec, handler: Handler<T>) -> Result<Self, SchemeError> {
        let name = validate_capability_name(&spec.name)?;

        let short = match spec.short.as_deref() {
            Some(short) if !short.is_empty() => Some(validate_short_name(short)?),
            _ => None,
        };
        let long = match spec.long.as_deref() {
            Some(long) if !long.is_empty() => Some(validate_long_name(long)?),
            _ => None,
        };

        if short.is_none() && long.is_none() {
            return Err(SchemeError::MissingName { capability: name });
        }

        Ok(Self {
            name,
            short,
            long,
            handler,
        })
    }

    /// Capability name this entry was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short form, if any.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Long form in its normalized (lower-cased) spelling, if any.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Declared value arity of the bound handler (0 or 1).
    pub fn arity(&self) -> usize {
        self.handler.arity()
    }

    /// Checks whether a candidate resolves to this entry.
    ///
    /// The name must match the short form exactly or the long form
    /// case-insensitively, and the value presence must agree with the
    /// declared arity.
    pub fn matches(&self, name: &str, has_value: bool) -> bool {
        self.matches_name(name) && self.matches_arity(has_value)
    }

    fn matches_name(&self, name: &str) -> bool {
        let matches_short = self.short.is_some_and(|short| {
            let mut chars = name.chars();
            chars.next() == Some(short) && chars.next().is_none()
        });

        matches_short
            || self
                .long
                .as_deref()
                .is_some_and(|long| name.to_lowercase() == long)
    }

    fn matches_arity(&self, has_value: bool) -> bool {
        if has_value {
            self.arity() == 1
        } else {
            self.arity() == 0
        }
    }

    /// Invokes the bound handler against the target.
    pub fn invoke(&self, target: &mut T, value: Option<&str>) -> Result<(), HandlerError> {
        self.handler.invoke(target, value)
    }

    /// Display form for diagnostics: the long form with dashes when present,
    /// otherwise the short form.
    pub fn display_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => self.name.clone(),
        }
    }
}

impl<T> PartialEq for SchemeEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.short == other.short
            && self.long == other.long
            && self.arity() == other.arity()
    }
}

impl<T> Eq for SchemeEntry<T> {}

impl<T> fmt::Debug for SchemeEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeEntry")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("long", &self.long)
            .field("arity", &self.arity())
            .finish()
    }
}

/// Ordered, validated set of scheme entries for one target type.
///
/// Built once via [`SchemeBuilder`](crate::SchemeBuilder), immutable
/// afterward, and freely reusable across parse calls. Declaration order
/// determines match precedence: the first entry satisfying a candidate wins.
pub struct Scheme<T> {
    entries: Vec<SchemeEntry<T>>,
}

impl<T> Scheme<T> {
    pub(crate) fn from_entries(entries: Vec<SchemeEntry<T>>) -> Self {
        Self { entries }
    }

    /// Entries in declaration (precedence) order.
    pub fn entries(&self) -> &[SchemeEntry<T>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scheme has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a candidate to the first matching entry, if any.
    pub fn find_match(&self, name: &str, has_value: bool) -> Option<&SchemeEntry<T>> {
        self.entries
            .iter()
            .find(|entry| entry.matches(name, has_value))
    }
}

impl<T> fmt::Debug for Scheme<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheme")
            .field("entries", &self.entries)
            .finish()
    }
}

/// A matched argument: a scheme entry plus its sanitized value, if any.
///
/// Created during matching, consumed by dispatch, never persisted. Equality
/// compares the referenced entry and the value, which is what makes repeated
/// flags idempotent in the parse result.
pub struct ParsedArgument<'s, T> {
    entry: &'s SchemeEntry<T>,
    value: Option<String>,
}

impl<'s, T> ParsedArgument<'s, T> {
    /// Pairs a matched entry with its sanitized value.
    pub fn new(entry: &'s SchemeEntry<T>, value: Option<String>) -> Self {
        Self { entry, value }
    }

    /// The matched scheme entry.
    pub fn entry(&self) -> &'s SchemeEntry<T> {
        self.entry
    }

    /// The sanitized value, when the matched flag carries one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Invokes the entry's handler with this argument's value.
    pub fn invoke(&self, target: &mut T) -> Result<(), HandlerError> {
        self.entry.invoke(target, self.value.as_deref())
    }
}

impl<T> PartialEq for ParsedArgument<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry && self.value == other.value
    }
}

impl<T> Eq for ParsedArgument<'_, T> {}

impl<T> fmt::Debug for ParsedArgument<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedArgument")
            .field("entry", &self.entry)
            .field("value", &self.value)
            .finish()
    }
}
