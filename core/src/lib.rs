//! Core types and validation for declarative argument schemes.
//!
//! This crate defines the data model for binding command-line flags to
//! handler capabilities:
//!
//! - [`ArgumentSpec`] — serializable declaration of one capability's flag
//!   names.
//! - [`Handler`] — a 0-arg or 1-string-arg closure bound to a target
//!   instance, carrying its value arity.
//! - [`SchemeEntry`] — a validated, immutable flag definition.
//! - [`Scheme`] — the ordered entry set one parse run matches against.
//! - [`SchemeBuilder`] — registration surface producing a validated scheme.
//! - [`ParsedArgument`] — a matched entry plus its sanitized value.
//!
//! Validation ([`SchemeError`]) happens entirely at build time: short names
//! must be exactly one character, long names at least two, and every entry
//! needs at least one of the two.
//!
//! # Example
//!
//! ```
//! use argbind_core::{ArgumentSpec, SchemeBuilder};
//!
//! #[derive(Default)]
//! struct App {
//!     debug: bool,
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
//!     .build()
//!     .unwrap();
//!
//! // Matching is case-insensitive on long names, exact on short names.
//! assert!(scheme.find_match("DEBUG", false).is_some());
//! assert!(scheme.find_match("D", false).is_none());
//! ```

mod builder;
mod types;
mod validate;

pub use builder::SchemeBuilder;
pub use types::{ArgumentSpec, Handler, HandlerError, ParsedArgument, Scheme, SchemeEntry};
pub use validate::{
    SchemeError, validate_capability_name, validate_long_name, validate_short_name,
};
