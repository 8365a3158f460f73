//! Core container types.
//!
//! This module contains the two pieces every caller touches:
//! - `CommandResult`, the accepted-or-rejected outcome of a command
//! - `Fst`, the state holder that runs commands and applies events
//!
//! The container never inspects the caller's state, command, event, error or
//! context types; all domain rules live in the supplied functions.

mod fst;
mod outcome;

pub use fst::{CommandHandler, Fst, TransitionFn};
pub use outcome::CommandResult;
