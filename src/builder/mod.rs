//! Builder API for fluent container construction.
//!
//! `Fst::new` takes all four parts positionally; the builder names them and
//! reports a missing part as a `BuildError` instead of a compile error at the
//! call site.

pub mod error;
pub mod fst;

pub use error::BuildError;
pub use fst::FstBuilder;
