//! # leftright
//!
//! Two closed sum types and a biased collector:
//!
//! - [`Either<L, R>`](Either): exactly one of a left or a right value,
//!   right-biased by convention.
//! - [`Outcome<T>`](Outcome): a success value or a captured [`Failure`].
//!   [`Outcome::attempt`] is the boundary where returned errors and panics
//!   are turned into values.
//! - [`EitherCollector`]: folds a sequence of `Either`s into one
//!   `Either<Vec<L>, Vec<R>>`, preferring the biased side whenever it is
//!   non-empty.
//!
//! ## Quick Example
//!
//! ```rust
//! use leftright::{CollectEither, Either, Failure, Outcome};
//!
//! fn parse(raw: &str) -> Either<String, i32> {
//!     Outcome::attempt(|| raw.parse::<i32>())
//!         .into_either()
//!         .map_left(|failure: Failure| format!("{}: {}", raw, failure))
//! }
//!
//! let all_good = ["1", "2", "3"].iter().map(|s| parse(s)).collect_left_biased();
//! assert_eq!(all_good, Either::right(vec![1, 2, 3]));
//!
//! let some_bad = ["1", "x"].iter().map(|s| parse(s)).collect_left_biased();
//! assert_eq!(
//!     some_bad,
//!     Either::left(vec!["x: invalid digit found in string".to_string()])
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when failures are captured and when a
//!   collection finishes. Off by default; without it the library produces no
//!   output.
//! - `async`: `Outcome::attempt_async` for futures.
//! - `proptest`: `Arbitrary` implementations for `Either` and `Outcome`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod collector;
pub mod either;
pub mod error;
pub mod outcome;
pub mod semigroup;
pub mod testing;

// Re-exports
pub use collector::{Bias, CollectEither, EitherAccumulator, EitherCollector};
pub use either::Either;
pub use error::{Access, Failure, NoSuchElement, Panicked};
pub use outcome::Outcome;
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collector::{Bias, CollectEither, EitherCollector};
    pub use crate::either::Either;
    pub use crate::error::{Failure, NoSuchElement};
    pub use crate::outcome::Outcome;
    pub use crate::semigroup::Semigroup;
}
