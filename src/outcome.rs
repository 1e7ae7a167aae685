//! A success-or-failure type with a single capture boundary.
//!
//! `Outcome<T>` is isomorphic to `Either<Failure, T>`: `Ok` wraps a value,
//! `Err` wraps a [`Failure`]. What sets it apart is [`Outcome::attempt`],
//! which runs fallible code and turns both returned errors and panics into
//! `Err`. The same capture applies to [`map`](Outcome::map),
//! [`try_map`](Outcome::try_map) and [`flat_map`](Outcome::flat_map), so a
//! chain of transformations never lets a failure escape.
//!
//! Once an `Err` appears, every later `map`/`flat_map` short-circuits and no
//! further closures run.
//!
//! # Examples
//!
//! ```rust
//! use leftright::{Failure, Outcome};
//!
//! let doubled = Outcome::attempt(|| "4".parse::<i32>()).map(|x| x * 2);
//! assert_eq!(doubled.get_result().unwrap(), 8);
//!
//! let failed = Outcome::attempt(|| "four".parse::<i32>()).map(|x| x * 2);
//! assert!(failed.is_err());
//!
//! let missing = Outcome::attempt(|| Ok::<Option<i32>, Failure>(None))
//!     .try_map(|v| v.ok_or_else(|| Failure::msg("value was None")));
//! assert_eq!(missing.get_failure().unwrap().to_string(), "value was None");
//! ```

use std::any::Any;
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};

use crate::either::Either;
use crate::error::{Access, Failure, NoSuchElement};

/// Either a successful value or a captured [`Failure`].
///
/// Equality and hashing follow `Either`: same variant and equal payloads.
/// Since `Failure` compares by identity, two `Err`s are equal only if they
/// carry the same captured failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The computation produced a value
    Ok(T),
    /// The computation failed
    Err(Failure),
}

fn captured(failure: Failure) -> Failure {
    #[cfg(feature = "tracing")]
    tracing::debug!(failure = %failure, "captured failure");
    failure
}

fn captured_panic(payload: Box<dyn Any + Send>) -> Failure {
    let failure = Failure::from_panic(payload);
    #[cfg(feature = "tracing")]
    tracing::warn!(failure = %failure, "captured panic");
    failure
}

// Runs `f`, turning a panic into `Outcome::Err`.
fn guard<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(payload) => Outcome::Err(captured_panic(payload)),
    }
}

impl<T> Outcome<T> {
    // ========== Constructors ==========

    /// Run a fallible computation, capturing its failure.
    ///
    /// `Ok(v)` becomes `Outcome::Ok(v)`. An `Err(e)` is converted into a
    /// [`Failure`]. A panic raised by `f` is caught and also becomes
    /// `Outcome::Err`; the failure then reports
    /// [`is_panic`](Failure::is_panic).
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::{Failure, Outcome};
    ///
    /// let ok = Outcome::attempt(|| Ok::<_, Failure>(4));
    /// assert_eq!(ok, Outcome::ok(4));
    ///
    /// let divisor = std::hint::black_box(0);
    /// let panicked = Outcome::attempt(|| Ok::<_, Failure>(1 / divisor));
    /// assert!(panicked.get_failure().unwrap().is_panic());
    /// ```
    pub fn attempt<E, F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Failure>,
    {
        guard(|| match f() {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Err(captured(e.into())),
        })
    }

    /// Await a fallible future, capturing its failure the way
    /// [`attempt`](Outcome::attempt) does.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::{Failure, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = Outcome::attempt_async(async { Ok::<_, Failure>(21 * 2) }).await;
    /// assert_eq!(outcome, Outcome::ok(42));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn attempt_async<E, Fut>(fut: Fut) -> Self
    where
        Fut: std::future::Future<Output = Result<T, E>>,
        E: Into<Failure>,
    {
        use futures::FutureExt;

        match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(Ok(value)) => Outcome::Ok(value),
            Ok(Err(e)) => Outcome::Err(captured(e.into())),
            Err(payload) => Outcome::Err(captured_panic(payload)),
        }
    }

    /// Create a successful outcome.
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Create a failed outcome.
    #[inline]
    pub fn err(failure: impl Into<Failure>) -> Self {
        Outcome::Err(failure.into())
    }

    // ========== Predicates ==========

    /// Returns `true` if this is an `Ok`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Err`.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    // ========== Extractors ==========

    /// Returns the value, or [`NoSuchElement`] if this is an `Err`.
    #[inline]
    pub fn get_result(self) -> Result<T, NoSuchElement> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(_) => Err(NoSuchElement::new(Access::Result)),
        }
    }

    /// Returns the failure, or [`NoSuchElement`] if this is an `Ok`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Outcome;
    ///
    /// let outcome = Outcome::ok(1);
    /// assert_eq!(
    ///     outcome.get_failure().unwrap_err().to_string(),
    ///     "tried to get failure from an Ok"
    /// );
    /// ```
    #[inline]
    pub fn get_failure(self) -> Result<Failure, NoSuchElement> {
        match self {
            Outcome::Ok(_) => Err(NoSuchElement::new(Access::Failure)),
            Outcome::Err(failure) => Ok(failure),
        }
    }

    /// Returns the value if present.
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        self.get_result().ok()
    }

    /// Convert to `Outcome<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(failure) => Outcome::Err(failure.clone()),
        }
    }

    // ========== Folding ==========

    /// Collapse into a single value; exactly one closure runs.
    #[inline]
    pub fn fold<U, F, G>(self, failure_fn: F, value_fn: G) -> U
    where
        F: FnOnce(Failure) -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => value_fn(value),
            Outcome::Err(failure) => failure_fn(failure),
        }
    }

    /// Run one of two handlers against the active payload.
    #[inline]
    pub fn run<F, G>(self, failure_fn: F, ok_fn: G)
    where
        F: FnOnce(Failure),
        G: FnOnce(T),
    {
        match self {
            Outcome::Ok(value) => ok_fn(value),
            Outcome::Err(failure) => failure_fn(failure),
        }
    }

    /// Run `f` on the value if this is an `Ok`; do nothing otherwise.
    #[inline]
    pub fn if_ok<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Outcome::Ok(value) = self {
            f(value);
        }
    }

    // ========== Transformations ==========

    /// Transform the value. A panic inside `f` becomes `Err`.
    ///
    /// On `Err` the failure is passed through and `f` never runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::Outcome;
    ///
    /// let outcome = Outcome::ok(Some(3)).map(|v: Option<i32>| v.expect("missing"));
    /// assert_eq!(outcome, Outcome::ok(3));
    ///
    /// let outcome = Outcome::ok(None).map(|v: Option<i32>| v.expect("missing"));
    /// assert!(outcome.is_err());
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => guard(|| Outcome::Ok(f(value))),
            Outcome::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Transform the value with a fallible function. Both a returned `Err`
    /// and a panic become `Outcome::Err`.
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Failure>,
    {
        match self {
            Outcome::Ok(value) => Outcome::attempt(|| f(value)),
            Outcome::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Chain an `Outcome`-returning computation. The returned outcome is
    /// used as-is; a panic inside `f` becomes `Err`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftright::{Failure, Outcome};
    ///
    /// fn half(n: i32) -> Outcome<i32> {
    ///     if n % 2 == 0 {
    ///         Outcome::ok(n / 2)
    ///     } else {
    ///         Outcome::err(Failure::msg(format!("{} is odd", n)))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(8).flat_map(half).flat_map(half), Outcome::ok(2));
    /// assert!(Outcome::ok(6).flat_map(half).flat_map(half).is_err());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Ok(value) => guard(|| f(value)),
            Outcome::Err(failure) => Outcome::Err(failure),
        }
    }

    // ========== Conversions ==========

    /// Convert to a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(failure) => Err(failure),
        }
    }

    /// Convert to `Either<Failure, T>` (Err becomes Left, Ok becomes Right).
    #[inline]
    pub fn into_either(self) -> Either<Failure, T> {
        self.fold(Either::Left, Either::Right)
    }
}

impl<T: Hash> Hash for Outcome<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Outcome::Ok(value) => value.hash(state),
            Outcome::Err(failure) => failure.hash(state),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Failure>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Err(e.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Either<Failure, T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_either()
    }
}

impl<T> From<Either<Failure, T>> for Outcome<T> {
    fn from(either: Either<Failure, T>) -> Self {
        either.fold(Outcome::Err, Outcome::Ok)
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_attempt_async_ok() {
        let outcome = Outcome::attempt_async(async { Ok::<_, Failure>(1) }).await;
        assert_eq!(outcome, Outcome::ok(1));
    }

    #[tokio::test]
    async fn test_attempt_async_error() {
        let outcome = Outcome::attempt_async(async { "x".parse::<u8>() }).await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_attempt_async_panic() {
        let fut = async {
            if std::hint::black_box(true) {
                panic!("async boom");
            }
            Ok::<i32, Failure>(0)
        };
        let outcome = Outcome::attempt_async(fut).await;
        let failure = outcome.get_failure().unwrap();
        assert!(failure.is_panic());
        assert_eq!(failure.to_string(), "panicked: async boom");
    }
}
