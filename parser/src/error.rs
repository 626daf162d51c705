//! Parse and dispatch error types.

use argbind_core::HandlerError;
use thiserror::Error;

/// Errors raised while parsing arguments against a scheme.
///
/// Any parse error aborts the whole parse call; partially-matched arguments
/// before the failing one are discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A flag value has an unbalanced leading or trailing quote.
    #[error("uneven quotes in argument value `{0}`")]
    UnevenQuotes(String),
}

/// Errors raised while dispatching parsed arguments.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler failed; the handler's own error is the cause. Handlers
    /// after the failing one are not invoked.
    #[error("handler for `{argument}` failed")]
    Handler {
        /// Display name of the argument whose handler failed.
        argument: String,
        /// The failure raised by the handler itself.
        #[source]
        source: HandlerError,
    },
}

/// Combined failure surface of [`process`](crate::process).
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The parse pass failed; nothing was dispatched.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A handler failed during dispatch.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
