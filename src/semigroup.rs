//! Associative merging of partial results.
//!
//! The collector builds independent accumulators over disjoint partitions of
//! its input and then merges them. For the result to be independent of how
//! the input was split, the merge must be associative:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use leftright::Semigroup;
//!
//! let lefts = vec!["a"].combine(vec!["b", "c"]);
//! assert_eq!(lefts, vec!["a", "b", "c"]);
//!
//! let pair = (vec![1], vec!['x']).combine((vec![2], vec!['y']));
//! assert_eq!(pair, (vec![1, 2], vec!['x', 'y']));
//! ```

/// A type that supports an associative binary operation.
///
/// `combine` takes `self` by value; clone first if the original is still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    #[inline]
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}
