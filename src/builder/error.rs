//! Build errors for the container builder.

use thiserror::Error;

/// Errors that can occur when building an `Fst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Context not specified. Call .context(ctx) before .build()")]
    MissingContext,

    #[error("Command handler not specified. Call .command_handler(f)")]
    MissingCommandHandler,

    #[error("Transition function not specified. Call .transition(f)")]
    MissingTransition,
}
