//! Two-variant outcome of handling a command.

use serde::{Deserialize, Serialize};

/// Outcome of submitting a command.
///
/// A command is either accepted, producing exactly one event, or rejected,
/// producing exactly one error. The value is a plain data holder: it never
/// changes after construction.
///
/// The derived trait impls only apply when the payload types support them,
/// so the container itself places no requirements on `E` or `R`.
///
/// # Example
///
/// ```rust
/// use cow_fst::CommandResult;
///
/// let accepted: CommandResult<u32, String> = CommandResult::Success(7);
/// assert!(accepted.is_success());
/// assert_eq!(accepted.success(), Some(&7));
///
/// let rejected: CommandResult<u32, String> = CommandResult::Err("too big".to_string());
/// assert!(rejected.is_err());
/// assert_eq!(rejected.into_result(), Err("too big".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandResult<E, R> {
    /// Command accepted; carries the produced event
    Success(E),

    /// Command rejected; carries the produced error
    Err(R),
}

impl<E, R> CommandResult<E, R> {
    /// Returns `true` if the command was accepted.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the command was rejected.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrow the event, if the command was accepted.
    pub fn success(&self) -> Option<&E> {
        match self {
            Self::Success(event) => Some(event),
            Self::Err(_) => None,
        }
    }

    /// Borrow the error, if the command was rejected.
    pub fn err(&self) -> Option<&R> {
        match self {
            Self::Success(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Take the event out, discarding an error.
    pub fn into_success(self) -> Option<E> {
        match self {
            Self::Success(event) => Some(event),
            Self::Err(_) => None,
        }
    }

    /// Take the error out, discarding an event.
    pub fn into_err(self) -> Option<R> {
        match self {
            Self::Success(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Convert into a standard `Result` so callers can use `?`.
    ///
    /// ```rust
    /// use cow_fst::CommandResult;
    ///
    /// fn accepted_value(outcome: CommandResult<u8, &'static str>) -> Result<u8, &'static str> {
    ///     let value = outcome.into_result()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(accepted_value(CommandResult::Success(4)), Ok(8));
    /// assert_eq!(accepted_value(CommandResult::Err("nope")), Err("nope"));
    /// ```
    pub fn into_result(self) -> Result<E, R> {
        match self {
            Self::Success(event) => Ok(event),
            Self::Err(error) => Err(error),
        }
    }

    /// Map the event, leaving an error untouched.
    pub fn map<F, T>(self, f: F) -> CommandResult<T, R>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(event) => CommandResult::Success(f(event)),
            Self::Err(error) => CommandResult::Err(error),
        }
    }

    /// Map the error, leaving an event untouched.
    pub fn map_err<F, T>(self, f: F) -> CommandResult<E, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Success(event) => CommandResult::Success(event),
            Self::Err(error) => CommandResult::Err(f(error)),
        }
    }

    /// Borrow both payloads.
    pub fn as_ref(&self) -> CommandResult<&E, &R> {
        match self {
            Self::Success(event) => CommandResult::Success(event),
            Self::Err(error) => CommandResult::Err(error),
        }
    }
}

impl<E, R> From<Result<E, R>> for CommandResult<E, R> {
    fn from(result: Result<E, R>) -> Self {
        match result {
            Ok(event) => Self::Success(event),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E, R> From<CommandResult<E, R>> for Result<E, R> {
    fn from(outcome: CommandResult<E, R>) -> Self {
        outcome.into_result()
    }
}
