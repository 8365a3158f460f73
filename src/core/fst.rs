//! The finite-state-transition container.

use super::outcome::CommandResult;
use std::fmt;

/// Decides whether a command is accepted (producing an event) or rejected
/// (producing an error), given the current state and the fixed context.
pub type CommandHandler<S, C, E, R, Ctx> =
    Box<dyn Fn(&S, C, &Ctx) -> CommandResult<E, R> + Send + Sync>;

/// Computes the next state from the current state and an accepted event.
pub type TransitionFn<S, E> = Box<dyn Fn(&S, &E) -> S + Send + Sync>;

/// In-memory command/event state holder.
///
/// An `Fst` owns the current state together with a command handler, a
/// transition function and an opaque context value. Submitting a command
/// runs the handler; an accepted command's event is applied through the
/// transition function before the call returns, a rejected command leaves
/// the state untouched.
///
/// Type parameters:
///
/// - `S`: state, replaced wholesale on every transition
/// - `C`: command, moved into the handler
/// - `E`: event produced by the handler and consumed by the transition
/// - `R`: error produced by the handler for a rejected command
/// - `Ctx`: auxiliary data handed to the handler on every call
///
/// Mutating operations take `&mut self`, so the container is single-owner:
/// sharing it across threads requires external synchronization.
///
/// Faults raised by the handler or the transition function are not caught.
/// A panic propagates to the caller unchanged; if the transition panics the
/// previous state is kept.
///
/// # Example
///
/// ```rust
/// use cow_fst::{CommandResult, Fst};
///
/// enum Command {
///     Add(u32),
/// }
///
/// enum Event {
///     Added(u32),
/// }
///
/// #[derive(Debug, PartialEq)]
/// enum Error {
///     Overflow,
/// }
///
/// struct Limit(u32);
///
/// let mut counter = Fst::new(
///     |total: &u32, command: Command, limit: &Limit| match command {
///         Command::Add(n) if total + n > limit.0 => CommandResult::Err(Error::Overflow),
///         Command::Add(n) => CommandResult::Success(Event::Added(n)),
///     },
///     |total: &u32, event: &Event| match event {
///         Event::Added(n) => total + n,
///     },
///     Limit(10),
///     0,
/// );
///
/// assert!(counter.handle_command(Command::Add(4)).is_success());
/// assert_eq!(*counter.state(), 4);
///
/// assert_eq!(counter.handle_command(Command::Add(7)).err(), Some(&Error::Overflow));
/// assert_eq!(*counter.state(), 4);
/// ```
pub struct Fst<S, C, E, R, Ctx = ()> {
    state: S,
    handler: CommandHandler<S, C, E, R, Ctx>,
    transition: TransitionFn<S, E>,
    context: Ctx,
}

impl<S, C, E, R, Ctx> Fst<S, C, E, R, Ctx> {
    /// Create a container in `initial_state`.
    ///
    /// The context is stored for the container's whole lifetime and is
    /// never replaced.
    pub fn new<H, T>(command_handler: H, transition: T, context: Ctx, initial_state: S) -> Self
    where
        H: Fn(&S, C, &Ctx) -> CommandResult<E, R> + Send + Sync + 'static,
        T: Fn(&S, &E) -> S + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(command_handler), Box::new(transition), context, initial_state)
    }

    /// Create a container from already boxed callables.
    pub fn from_boxed(
        command_handler: CommandHandler<S, C, E, R, Ctx>,
        transition: TransitionFn<S, E>,
        context: Ctx,
        initial_state: S,
    ) -> Self {
        Self {
            state: initial_state,
            handler: command_handler,
            transition,
            context,
        }
    }

    /// Submit a command.
    ///
    /// The handler sees the current state, the command and the context. On
    /// `Success` the event is applied before this returns; on `Err` the
    /// state is unchanged. The handler's outcome is returned as-is in both
    /// cases.
    pub fn handle_command(&mut self, command: C) -> CommandResult<E, R> {
        let outcome = (self.handler)(&self.state, command, &self.context);

        match &outcome {
            CommandResult::Success(event) => {
                tracing::debug!(accepted = true, "command handled");
                self.transition_with(event);
            }
            CommandResult::Err(_) => {
                tracing::debug!(accepted = false, "command handled");
            }
        }

        outcome
    }

    /// Apply an event without consulting the command handler.
    ///
    /// Meant for events already known to be valid, e.g. ones read back from
    /// an external log. No validation is performed.
    pub fn apply_event(&mut self, event: E) {
        self.transition_with(&event);
    }

    /// Apply a sequence of events in iteration order.
    ///
    /// ```rust
    /// use cow_fst::{CommandResult, Fst};
    ///
    /// let mut fst: Fst<Vec<char>, (), char, ()> = Fst::new(
    ///     |_: &Vec<char>, _: (), _: &()| CommandResult::Err(()),
    ///     |letters: &Vec<char>, c: &char| {
    ///         let mut next = letters.clone();
    ///         next.push(*c);
    ///         next
    ///     },
    ///     (),
    ///     Vec::new(),
    /// );
    ///
    /// fst.apply_events("cow".chars());
    /// assert_eq!(fst.state(), &vec!['c', 'o', 'w']);
    /// ```
    pub fn apply_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = E>,
    {
        for event in events {
            self.apply_event(event);
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Context handed to the command handler (pure)
    pub fn context(&self) -> &Ctx {
        &self.context
    }

    /// Consume the container, keeping only its current state.
    pub fn into_state(self) -> S {
        self.state
    }

    fn transition_with(&mut self, event: &E) {
        // Computed before assignment: a panicking transition leaves the old state.
        let next = (self.transition)(&self.state, event);
        self.state = next;
        tracing::trace!("event applied");
    }
}

impl<S: fmt::Debug, C, E, R, Ctx: fmt::Debug> fmt::Debug for Fst<S, C, E, R, Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fst")
            .field("state", &self.state)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
