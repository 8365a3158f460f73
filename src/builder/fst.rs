//! Builder for constructing `Fst` containers.

use crate::builder::error::BuildError;
use crate::core::{CommandHandler, CommandResult, Fst, TransitionFn};

/// Builder for constructing an `Fst` with a fluent API.
///
/// # Example
///
/// ```rust
/// use cow_fst::builder::FstBuilder;
/// use cow_fst::CommandResult;
///
/// let mut fst = FstBuilder::new()
///     .initial(String::from("a"))
///     .context(())
///     .command_handler(|_: &String, name: String, _: &()| {
///         if name.is_empty() {
///             CommandResult::Err("name cannot be empty")
///         } else {
///             CommandResult::Success(name)
///         }
///     })
///     .transition(|_: &String, name: &String| name.clone())
///     .build()
///     .unwrap();
///
/// assert!(fst.handle_command(String::new()).is_err());
/// assert!(fst.handle_command(String::from("cow")).is_success());
/// assert_eq!(fst.state(), "cow");
/// ```
pub struct FstBuilder<S, C, E, R, Ctx = ()> {
    initial: Option<S>,
    context: Option<Ctx>,
    handler: Option<CommandHandler<S, C, E, R, Ctx>>,
    transition: Option<TransitionFn<S, E>>,
}

impl<S, C, E, R, Ctx> FstBuilder<S, C, E, R, Ctx> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            context: None,
            handler: None,
            transition: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the context handed to the command handler (required).
    pub fn context(mut self, context: Ctx) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the command handler (required).
    pub fn command_handler<H>(mut self, handler: H) -> Self
    where
        H: Fn(&S, C, &Ctx) -> CommandResult<E, R> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Set the transition function (required).
    pub fn transition<T>(mut self, transition: T) -> Self
    where
        T: Fn(&S, &E) -> S + Send + Sync + 'static,
    {
        self.transition = Some(Box::new(transition));
        self
    }

    /// Build the container.
    /// Returns an error naming the first missing part.
    pub fn build(self) -> Result<Fst<S, C, E, R, Ctx>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;
        let handler = self.handler.ok_or(BuildError::MissingCommandHandler)?;
        let transition = self.transition.ok_or(BuildError::MissingTransition)?;

        Ok(Fst::from_boxed(handler, transition, context, initial))
    }
}

impl<S, C, E, R, Ctx> Default for FstBuilder<S, C, E, R, Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C, E, R, Ctx> Fst<S, C, E, R, Ctx> {
    /// Start building a container.
    pub fn builder() -> FstBuilder<S, C, E, R, Ctx> {
        FstBuilder::new()
    }
}
