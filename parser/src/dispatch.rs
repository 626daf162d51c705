//! Handler invocation for parsed arguments.

use argbind_core::ParsedArgument;
use tracing::debug;

use crate::error::DispatchError;

/// Invokes the handler bound to each parsed argument, in collection order.
///
/// Zero-arg handlers are called when no value is present, one-arg handlers
/// when a value is present. Invocation is strictly sequential and
/// fail-fast: once a handler fails, subsequent handlers are not invoked.
///
/// # Errors
///
/// Returns [`DispatchError::Handler`] wrapping the failing handler's error
/// as its cause.
pub fn dispatch<T>(
    target: &mut T,
    arguments: &[ParsedArgument<'_, T>],
) -> Result<(), DispatchError> {
    for argument in arguments {
        let name = argument.entry().display_name();
        debug!(argument = %name, "invoking argument handler");

        argument
            .invoke(target)
            .map_err(|source| DispatchError::Handler {
                argument: name,
                source,
            })?;
    }

    Ok(())
}
