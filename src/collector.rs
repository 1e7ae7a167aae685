//! Biased reduction of a sequence of `Either`s into an `Either` of lists.
//!
//! Every input value is appended, in order, to either a list of lefts or a
//! list of rights. When the input is exhausted the [`Bias`] decides which
//! list becomes the result:
//!
//! - **left-biased**: `Left(lefts)` if there is at least one left, otherwise
//!   `Right(rights)`. Empty input gives `Right([])`.
//! - **right-biased**: `Right(rights)` if there is at least one right,
//!   otherwise `Left(lefts)`. Empty input gives `Left([])`.
//!
//! The biased side wins whenever it is non-empty, regardless of how many
//! values landed on the other side.
//!
//! # Examples
//!
//! ```rust
//! use leftright::{CollectEither, Either, EitherCollector};
//!
//! let items = vec![Either::left("a"), Either::right(1), Either::left("b")];
//!
//! let errors_first = EitherCollector::to_left_biased().collect(items.clone());
//! assert_eq!(errors_first, Either::left(vec!["a", "b"]));
//!
//! let values_first = items.into_iter().collect_right_biased();
//! assert_eq!(values_first, Either::right(vec![1]));
//! ```
//!
//! # Partitioned reduction
//!
//! Accumulators can be built independently and merged afterwards. Merging
//! concatenates lefts with lefts and rights with rights, so it is
//! associative and keeps the order within each partition:
//!
//! ```rust
//! use leftright::{Either, EitherCollector, Semigroup};
//!
//! let collector = EitherCollector::to_left_biased();
//!
//! let mut first = collector.accumulator();
//! first.add(Either::<&str, i32>::right(1));
//! let mut second = collector.accumulator();
//! second.add(Either::right(2));
//!
//! assert_eq!(first.combine(second).finish(), Either::right(vec![1, 2]));
//! ```

use std::panic;
use std::thread;

use crate::either::Either;
use crate::semigroup::Semigroup;

/// Which side of the aggregate wins when it is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bias {
    /// Prefer `Left(lefts)` whenever any left was seen.
    Left,
    /// Prefer `Right(rights)` whenever any right was seen.
    Right,
}

/// Reduces `Either<L, R>` values into a single `Either<Vec<L>, Vec<R>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EitherCollector {
    bias: Bias,
}

impl EitherCollector {
    /// Create a collector with the given bias.
    pub fn new(bias: Bias) -> Self {
        EitherCollector { bias }
    }

    /// A collector whose result is `Left` iff at least one left was seen.
    pub fn to_left_biased() -> Self {
        EitherCollector::new(Bias::Left)
    }

    /// A collector whose result is `Right` iff at least one right was seen.
    pub fn to_right_biased() -> Self {
        EitherCollector::new(Bias::Right)
    }

    /// The bias this collector finishes with.
    pub fn bias(&self) -> Bias {
        self.bias
    }

    /// An empty accumulator carrying this collector's bias.
    pub fn accumulator<L, R>(&self) -> EitherAccumulator<L, R> {
        EitherAccumulator::new(self.bias)
    }

    /// Reduce `items` sequentially.
    pub fn collect<L, R, I>(&self, items: I) -> Either<Vec<L>, Vec<R>>
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        let mut acc = self.accumulator();
        acc.extend(items);
        acc.finish()
    }

    /// Reduce each partition on its own scoped thread, then merge the
    /// partial accumulators in partition order.
    ///
    /// The result is identical to [`collect`](Self::collect) over the
    /// concatenated partitions. A panic while iterating a partition is
    /// propagated to the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::{Either, EitherCollector};
    ///
    /// let partitions = vec![
    ///     vec![Either::<&str, i32>::right(1), Either::right(2)],
    ///     vec![Either::right(3)],
    /// ];
    ///
    /// let result = EitherCollector::to_right_biased().collect_partitioned(partitions);
    /// assert_eq!(result, Either::right(vec![1, 2, 3]));
    /// ```
    pub fn collect_partitioned<L, R, P, I>(&self, partitions: P) -> Either<Vec<L>, Vec<R>>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = Either<L, R>> + Send,
        L: Send,
        R: Send,
    {
        let bias = self.bias;

        let partials: Vec<EitherAccumulator<L, R>> = thread::scope(|scope| {
            let handles: Vec<_> = partitions
                .into_iter()
                .map(|partition| {
                    scope.spawn(move || {
                        let mut acc = EitherAccumulator::new(bias);
                        acc.extend(partition);
                        acc
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload))
                })
                .collect()
        });

        partials
            .into_iter()
            .fold(self.accumulator(), Semigroup::combine)
            .finish()
    }
}

/// Two ordered lists of lefts and rights, built up while collecting.
///
/// An accumulator is owned by one task while it is being filled. Partial
/// accumulators are merged with [`Semigroup::combine`]; the receiver's bias
/// is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EitherAccumulator<L, R> {
    lefts: Vec<L>,
    rights: Vec<R>,
    bias: Bias,
}

impl<L, R> EitherAccumulator<L, R> {
    /// Create an empty accumulator.
    pub fn new(bias: Bias) -> Self {
        EitherAccumulator {
            lefts: Vec::new(),
            rights: Vec::new(),
            bias,
        }
    }

    /// Append one value to the matching list.
    pub fn add(&mut self, item: Either<L, R>) {
        match item {
            Either::Left(l) => self.lefts.push(l),
            Either::Right(r) => self.rights.push(r),
        }
    }

    /// Lefts seen so far, in encounter order.
    pub fn lefts(&self) -> &[L] {
        &self.lefts
    }

    /// Rights seen so far, in encounter order.
    pub fn rights(&self) -> &[R] {
        &self.rights
    }

    /// Produce the aggregate according to the bias.
    pub fn finish(self) -> Either<Vec<L>, Vec<R>> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            bias = ?self.bias,
            lefts = self.lefts.len(),
            rights = self.rights.len(),
            "finishing either collection"
        );

        match self.bias {
            Bias::Left if !self.lefts.is_empty() => Either::Left(self.lefts),
            Bias::Left => Either::Right(self.rights),
            Bias::Right if !self.rights.is_empty() => Either::Right(self.rights),
            Bias::Right => Either::Left(self.lefts),
        }
    }
}

impl<L, R> Extend<Either<L, R>> for EitherAccumulator<L, R> {
    fn extend<I: IntoIterator<Item = Either<L, R>>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<L, R> Semigroup for EitherAccumulator<L, R> {
    fn combine(self, other: Self) -> Self {
        let (lefts, rights) = (self.lefts, self.rights).combine((other.lefts, other.rights));
        EitherAccumulator {
            lefts,
            rights,
            bias: self.bias,
        }
    }
}

/// Collect an iterator of `Either`s with a biased collector.
///
/// Implemented for every iterator over `Either<L, R>`.
pub trait CollectEither<L, R>: Iterator<Item = Either<L, R>> + Sized {
    /// Collect with the given collector.
    fn collect_either(self, collector: EitherCollector) -> Either<Vec<L>, Vec<R>> {
        collector.collect(self)
    }

    /// Shorthand for `collect_either(EitherCollector::to_left_biased())`.
    fn collect_left_biased(self) -> Either<Vec<L>, Vec<R>> {
        self.collect_either(EitherCollector::to_left_biased())
    }

    /// Shorthand for `collect_either(EitherCollector::to_right_biased())`.
    fn collect_right_biased(self) -> Either<Vec<L>, Vec<R>> {
        self.collect_either(EitherCollector::to_right_biased())
    }
}

impl<L, R, I> CollectEither<L, R> for I where I: Iterator<Item = Either<L, R>> {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_items() -> impl Strategy<Value = Vec<Either<u8, i16>>> {
        prop::collection::vec(
            prop_oneof![
                any::<u8>().prop_map(Either::Left),
                any::<i16>().prop_map(Either::Right),
            ],
            0..40,
        )
    }

    proptest! {
        #[test]
        fn prop_split_merge_matches_single_pass(items in arb_items(), split in any::<prop::sample::Index>()) {
            let at = split.index(items.len() + 1);
            let (head, tail) = items.split_at(at);

            let mut single = EitherAccumulator::new(Bias::Left);
            single.extend(items.iter().copied());

            let mut first = EitherAccumulator::new(Bias::Left);
            first.extend(head.iter().copied());
            let mut second = EitherAccumulator::new(Bias::Left);
            second.extend(tail.iter().copied());

            prop_assert_eq!(first.combine(second), single);
        }

        #[test]
        fn prop_merge_associative(a in arb_items(), b in arb_items(), c in arb_items()) {
            let build = |items: &[Either<u8, i16>]| {
                let mut acc = EitherAccumulator::new(Bias::Right);
                acc.extend(items.iter().copied());
                acc
            };

            let left = build(&a).combine(build(&b)).combine(build(&c));
            let right = build(&a).combine(build(&b).combine(build(&c)));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_biased_side_wins_when_present(items in arb_items()) {
            let any_left = items.iter().any(Either::is_left);
            let any_right = items.iter().any(Either::is_right);

            let left_biased = EitherCollector::to_left_biased().collect(items.clone());
            prop_assert_eq!(left_biased.is_left(), any_left);

            let right_biased = EitherCollector::to_right_biased().collect(items);
            prop_assert_eq!(right_biased.is_right(), any_right);
        }
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_finish_emits_trace_event() {
        let _ = EitherCollector::to_left_biased().collect(vec![Either::<&str, i32>::right(1)]);
        assert!(logs_contain("finishing either collection"));
    }
}
