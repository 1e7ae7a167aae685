//! A right-biased sum type holding exactly one of two values.
//!
//! # Right-Biased Convention
//!
//! `Either<L, R>` carries no success/failure meaning of its own, but by
//! convention `Right` is the primary path and `Left` the alternative ("you
//! either get the right answer or whatever's left"). The bias shows up in
//! [`Either::either`], which prefers the right-hand source whenever it can
//! produce a value, and in `IntoIterator`, which yields only `Right` values.
//!
//! # Examples
//!
//! ```rust
//! use leftright::Either;
//!
//! fn parse_port(raw: &str) -> Either<String, u16> {
//!     raw.parse()
//!         .map(Either::right)
//!         .unwrap_or_else(|_| Either::left(format!("not a port: {}", raw)))
//! }
//!
//! let described = parse_port("8080").fold(
//!     |err| err,
//!     |port| format!("listening on {}", port),
//! );
//! assert_eq!(described, "listening on 8080");
//!
//! let chained = parse_port("80")
//!     .flat_map_right(|p| if p < 1024 {
//!         Either::left(format!("{} is privileged", p))
//!     } else {
//!         Either::right(p)
//!     });
//! assert_eq!(chained, Either::left("80 is privileged".to_string()));
//! ```

use std::hash::{Hash, Hasher};

use crate::error::{Access, NoSuchElement};

/// A value that is either `Left(L)` or `Right(R)`, never both and never
/// neither.
///
/// Two `Either`s are equal when they are the same variant and wrap equal
/// values. Hashing delegates to the wrapped value, so `Either::left(x)` hashes
/// the same as `x` itself.
///
/// # Example
///
/// ```rust
/// use leftright::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// match left {
///     Either::Left(n) => assert_eq!(n, 42),
///     Either::Right(_) => unreachable!(),
/// }
///
/// assert_eq!(right.fold(|n| n.to_string(), |s| s.to_uppercase()), "HELLO");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Decide which side to build from two suppliers, preferring the right.
    ///
    /// `right_fn` runs first. If it yields `Some`, the result is a `Right`
    /// and `left_fn` is never called. Otherwise `left_fn` runs and its value
    /// becomes a `Left`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let only_left: Either<&str, i32> = Either::either(|| "test", || None);
    /// assert_eq!(only_left, Either::left("test"));
    ///
    /// let only_right: Either<&str, i32> = Either::either(|| "unused", || Some(42));
    /// assert_eq!(only_right, Either::right(42));
    /// ```
    pub fn either<F, G>(left_fn: F, right_fn: G) -> Self
    where
        F: FnOnce() -> L,
        G: FnOnce() -> Option<R>,
    {
        match right_fn() {
            Some(r) => Either::Right(r),
            None => Either::Left(left_fn()),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// Returns the left value, or [`NoSuchElement`] if this is a `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("test");
    /// assert_eq!(left.get_left(), Ok("test"));
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// let err = right.get_left().unwrap_err();
    /// assert_eq!(err.to_string(), "tried to get left from a Right");
    /// ```
    #[inline]
    pub fn get_left(self) -> Result<L, NoSuchElement> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(NoSuchElement::new(Access::Left)),
        }
    }

    /// Returns the right value, or [`NoSuchElement`] if this is a `Left`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("test");
    /// let err = left.get_right().unwrap_err();
    /// assert_eq!(err.to_string(), "tried to get right from a Left");
    /// ```
    #[inline]
    pub fn get_right(self) -> Result<R, NoSuchElement> {
        match self {
            Either::Left(_) => Err(NoSuchElement::new(Access::Right)),
            Either::Right(r) => Ok(r),
        }
    }

    /// Extract the left value, panicking if Right.
    ///
    /// # Panics
    ///
    /// Panics with the [`NoSuchElement`] message if the value is a `Right`.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self.get_left() {
            Ok(l) => l,
            Err(e) => panic!("{}", e),
        }
    }

    /// Extract the right value, panicking if Left.
    ///
    /// # Panics
    ///
    /// Panics with the [`NoSuchElement`] message if the value is a `Left`.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self.get_right() {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }

    /// Returns the left value if present, consuming self.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        self.get_left().ok()
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        self.get_right().ok()
    }

    /// Returns the left value, or the error produced by `err_fn` if this is a
    /// `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// assert_eq!(right.left_or_err(|| "wanted a left"), Err("wanted a left"));
    /// ```
    #[inline]
    pub fn left_or_err<X, F>(self, err_fn: F) -> Result<L, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(err_fn()),
        }
    }

    /// Returns the left value, or an error built from the right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// assert_eq!(
    ///     right.left_or_err_with(|r| format!("unexpected right: {}", r)),
    ///     Err("unexpected right: 42".to_string())
    /// );
    /// ```
    #[inline]
    pub fn left_or_err_with<X, F>(self, err_fn: F) -> Result<L, X>
    where
        F: FnOnce(R) -> X,
    {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(r) => Err(err_fn(r)),
        }
    }

    /// Returns the right value, or the error produced by `err_fn` if this is
    /// a `Left`.
    #[inline]
    pub fn right_or_err<X, F>(self, err_fn: F) -> Result<R, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Either::Left(_) => Err(err_fn()),
            Either::Right(r) => Ok(r),
        }
    }

    /// Returns the right value, or an error built from the left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("bad input");
    /// let err = left
    ///     .right_or_err_with(|l| std::io::Error::new(std::io::ErrorKind::InvalidData, l))
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "bad input");
    /// ```
    #[inline]
    pub fn right_or_err_with<X, F>(self, err_fn: F) -> Result<R, X>
    where
        F: FnOnce(L) -> X,
    {
        match self {
            Either::Left(l) => Err(err_fn(l)),
            Either::Right(r) => Ok(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Convert to `Either<&mut L, &mut R>`.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Folding ==========

    /// Collapse both variants into a single value.
    ///
    /// Exactly one of the two closures runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("test");
    /// let right: Either<&str, i32> = Either::right(42);
    ///
    /// assert_eq!(left.fold(|l| l.to_uppercase(), |r| r.to_string()), "TEST");
    /// assert_eq!(right.fold(|l| l.to_uppercase(), |r| r.to_string()), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Run one of two consumers against the active value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(42);
    /// e.run(|l| println!("left: {}", l), |r| println!("right: {}", r));
    /// ```
    #[inline]
    pub fn run<F, G>(self, left_fn: F, right_fn: G)
    where
        F: FnOnce(L),
        G: FnOnce(R),
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    // ========== Transformations ==========

    /// Transform whichever side is active, keeping it on the same side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("test");
    /// let right: Either<&str, i32> = Either::right(42);
    ///
    /// assert_eq!(left.map(|s| s.to_uppercase(), |n| n * 2), Either::left("TEST".to_string()));
    /// assert_eq!(right.map(|s| s.to_uppercase(), |n| n * 2), Either::right(84));
    /// ```
    #[inline]
    pub fn map<L2, R2, F, G>(self, left_fn: F, right_fn: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(left_fn(l)),
            Either::Right(r) => Either::Right(right_fn(r)),
        }
    }

    /// Transform the left value, passing right values through unchanged.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.map(f, |r| r)
    }

    /// Transform the right value, passing left values through unchanged.
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.map(|l| l, f)
    }

    /// Apply an `Either`-returning transformation to whichever side is active
    /// and return its result directly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("abc");
    /// let flattened: Either<usize, i32> = left.flat_map(
    ///     |s| Either::left(s.len()),
    ///     |n| Either::right(n + 1),
    /// );
    /// assert_eq!(flattened, Either::left(3));
    /// ```
    #[inline]
    pub fn flat_map<L2, R2, F, G>(self, left_fn: F, right_fn: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> Either<L2, R2>,
        G: FnOnce(R) -> Either<L2, R2>,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Chain a computation on the left value; a `Right` passes through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// assert_eq!(
    ///     left.flat_map_left(|_| Either::<i32, &str>::right("recovered")),
    ///     Either::right("recovered")
    /// );
    /// ```
    #[inline]
    pub fn flat_map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        self.flat_map(f, Either::Right)
    }

    /// Chain a computation on the right value; a `Left` passes through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(21);
    /// let left: Either<&str, i32> = Either::left("error");
    ///
    /// assert_eq!(right.flat_map_right(|x| Either::right(x * 2)), Either::right(42));
    /// assert_eq!(left.flat_map_right(|x| Either::right(x * 2)), Either::left("error"));
    /// ```
    #[inline]
    pub fn flat_map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.flat_map(Either::Left, f)
    }

    /// Swap Left and Right.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    // ========== Conversions ==========

    /// Convert to `Result` (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }

    /// Create from `Result` (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested Either whose inner value sits on the right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
    /// assert_eq!(nested.flatten(), Either::left("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.flat_map_right(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<L: Hash, R: Hash> Hash for Either<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Either::Left(l) => l.hash(state),
            Either::Right(r) => r.hash(state),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_right().into_iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_left_accessors(x: i32) {
            let e: Either<i32, String> = Either::left(x);
            prop_assert!(e.is_left());
            prop_assert!(!e.is_right());
            prop_assert_eq!(e.clone().get_left(), Ok(x));
            prop_assert!(e.get_right().is_err());
        }

        #[test]
        fn prop_map_left_on_right_is_identity(s in ".*") {
            let e: Either<i32, String> = Either::right(s.clone());
            prop_assert_eq!(e.map_left(|x| x.wrapping_add(1)), Either::right(s));
        }

        #[test]
        fn prop_map_right_on_left_is_identity(x: i32) {
            let e: Either<i32, String> = Either::left(x);
            prop_assert_eq!(e.map_right(|s| s.len()), Either::left(x));
        }

        #[test]
        fn prop_swap_involution(x: i32, is_left: bool) {
            let e: Either<i32, i32> = if is_left { Either::left(x) } else { Either::right(x) };
            prop_assert_eq!(e.swap().swap(), e);
        }

        #[test]
        fn prop_result_roundtrip(x: i32) {
            let either: Either<(), i32> = Either::right(x);
            let result: Result<i32, ()> = either.into();
            let back: Either<(), i32> = result.into();
            prop_assert_eq!(back, Either::right(x));
        }
    }
}
