//! CowFst: a generic finite-state-transition container
//!
//! CowFst implements the command/event pattern as a small, in-memory,
//! single-owner building block. A command is validated by a caller-supplied
//! handler and turned into either an event or an error; an accepted event
//! updates the held state through a caller-supplied pure transition function.
//!
//! # Core Concepts
//!
//! - **Command handler**: `(state, command, context) -> CommandResult<event, error>`,
//!   the only place business rules are enforced
//! - **Transition function**: `(state, event) -> state`, total over the events the
//!   handler can emit
//! - **Context**: auxiliary data fixed at construction
//!
//! There is no persistence, no event log and no internal locking.
//!
//! # Example
//!
//! ```rust
//! use cow_fst::{CommandResult, Fst};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Profile {
//!     name: String,
//!     value: i32,
//! }
//!
//! enum Command {
//!     ChangeName(String),
//!     ChangeValue(i32),
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Event {
//!     NameChanged(String),
//!     ValueChanged(i32),
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Error {
//!     CannotChangeName(String),
//!     CannotChangeValue(String),
//! }
//!
//! fn handle(_: &Profile, command: Command, _: &()) -> CommandResult<Event, Error> {
//!     match command {
//!         Command::ChangeName(name) if name == "nameless" => {
//!             CommandResult::Err(Error::CannotChangeName("result cannot be nameless".into()))
//!         }
//!         Command::ChangeName(name) => CommandResult::Success(Event::NameChanged(name)),
//!         Command::ChangeValue(value) if value > 10 => {
//!             CommandResult::Err(Error::CannotChangeValue("value must be <= 10".into()))
//!         }
//!         Command::ChangeValue(value) => CommandResult::Success(Event::ValueChanged(value)),
//!     }
//! }
//!
//! fn transition(profile: &Profile, event: &Event) -> Profile {
//!     match event {
//!         Event::NameChanged(name) => Profile { name: name.clone(), ..profile.clone() },
//!         Event::ValueChanged(value) => Profile { value: *value, ..profile.clone() },
//!     }
//! }
//!
//! let mut fst = Fst::new(handle, transition, (), Profile { name: "a".into(), value: 1 });
//!
//! let outcome = fst.handle_command(Command::ChangeName("cow".into()));
//! assert_eq!(outcome, CommandResult::Success(Event::NameChanged("cow".into())));
//! assert_eq!(fst.state(), &Profile { name: "cow".into(), value: 1 });
//!
//! let outcome = fst.handle_command(Command::ChangeValue(11));
//! assert!(outcome.is_err());
//! assert_eq!(fst.state().value, 1);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use self::builder::{BuildError, FstBuilder};
pub use self::core::{CommandHandler, CommandResult, Fst, TransitionFn};
