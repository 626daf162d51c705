//! Scheme construction from capability registrations.

use crate::types::{ArgumentSpec, Handler, HandlerError, Scheme, SchemeEntry};
use crate::validate::SchemeError;

/// Collects capability registrations and builds a validated [`Scheme`].
///
/// Registrations are name-sorted before entries are built, giving
/// deterministic precedence when two entries could match the same candidate.
/// All name validation happens in [`build`](SchemeBuilder::build); a
/// malformed definition fails there, before any parsing is attempted.
///
/// # Examples
///
/// ```
/// use argbind_core::{ArgumentSpec, SchemeBuilder};
///
/// #[derive(Default)]
/// struct App {
///     debug: bool,
///     configuration_file: Option<String>,
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
///     .value(
///         ArgumentSpec::new("configuration-file").with_long("configuration-file"),
///         |app, value| {
///             app.configuration_file = Some(value.to_string());
///             Ok(())
///         },
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(scheme.len(), 2);
/// // Entries are name-sorted: "configuration-file" precedes "debug".
/// assert_eq!(scheme.entries()[0].name(), "configuration-file");
/// ```
pub struct SchemeBuilder<T> {
    capabilities: Vec<(ArgumentSpec, Handler<T>)>,
}

impl<T> SchemeBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            capabilities: Vec::new(),
        }
    }

    /// Registers a zero-argument capability.
    pub fn flag(
        self,
        spec: ArgumentSpec,
        f: impl Fn(&mut T) -> Result<(), HandlerError> + 'static,
    ) -> Self {
        self.handler(spec, Handler::flag(f))
    }

    /// Registers a capability taking a single string value.
    pub fn value(
        self,
        spec: ArgumentSpec,
        f: impl Fn(&mut T, &str) -> Result<(), HandlerError> + 'static,
    ) -> Self {
        self.handler(spec, Handler::value(f))
    }

    /// Registers a capability with an explicit [`Handler`].
    pub fn handler(mut self, spec: ArgumentSpec, handler: Handler<T>) -> Self {
        self.capabilities.push((spec, handler));
        self
    }

    /// Validates every registration and produces the scheme.
    ///
    /// An empty builder yields an empty scheme, which parses any input to an
    /// empty result; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemeError`] encountered, in name-sorted order.
    pub fn build(mut self) -> Result<Scheme<T>, SchemeError> {
        // Stable sort: capabilities sharing a name keep registration order.
        self.capabilities
            .sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));

        let mut entries = Vec::with_capacity(self.capabilities.len());
        for (spec, handler) in self.capabilities {
            entries.push(SchemeEntry::new(spec, handler)?);
        }

        Ok(Scheme::from_entries(entries))
    }
}

impl<T> Default for SchemeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Target;

    #[test]
    fn build_sorts_entries_by_capability_name() {
        let scheme = SchemeBuilder::new()
            .flag(ArgumentSpec::new("verbose").with_short("v"), |_: &mut Target| Ok(()))
            .flag(ArgumentSpec::new("debug").with_short("d"), |_| Ok(()))
            .build()
            .expect("valid scheme");

        let names: Vec<&str> = scheme.entries().iter().map(|entry| entry.name()).collect();
        assert_eq!(names, vec!["debug", "verbose"]);
    }

    #[test]
    fn build_fails_on_invalid_short_name() {
        let err = SchemeBuilder::new()
            .flag(ArgumentSpec::new("debug").with_short("de"), |_: &mut Target| Ok(()))
            .build()
            .unwrap_err();

        assert_eq!(err, SchemeError::InvalidShortName("de".to_string()));
    }

    #[test]
    fn build_fails_on_invalid_long_name() {
        let err = SchemeBuilder::new()
            .flag(ArgumentSpec::new("debug").with_long("d"), |_: &mut Target| Ok(()))
            .build()
            .unwrap_err();

        assert_eq!(err, SchemeError::InvalidLongName("d".to_string()));
    }

    #[test]
    fn empty_builder_yields_empty_scheme() {
        let scheme = SchemeBuilder::<Target>::new().build().expect("empty scheme");
        assert!(scheme.is_empty());
    }

    #[test]
    fn duplicate_names_keep_registration_order() {
        let scheme = SchemeBuilder::new()
            .flag(ArgumentSpec::new("debug").with_short("d"), |_: &mut Target| Ok(()))
            .flag(ArgumentSpec::new("debug").with_short("e"), |_| Ok(()))
            .build()
            .expect("valid scheme");

        assert_eq!(scheme.entries()[0].short(), Some('d'));
        assert_eq!(scheme.entries()[1].short(), Some('e'));
    }
}
