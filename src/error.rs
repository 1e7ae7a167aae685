//! Error types surfaced by `Either` and `Outcome`.
//!
//! Two kinds of error live here:
//!
//! - [`NoSuchElement`] is returned when a caller asks for the variant that is
//!   not there, e.g. `get_right` on a `Left`. It always names the access that
//!   was attempted.
//! - [`Failure`] is the opaque failure carried by [`Outcome::Err`]. It wraps
//!   any `std::error::Error + Send + Sync` or the message of a captured panic.
//!
//! # Examples
//!
//! ```
//! use leftright::{Either, Failure};
//!
//! let e: Either<&str, i32> = Either::left("oops");
//! let err = e.get_right().unwrap_err();
//! assert_eq!(err.to_string(), "tried to get right from a Left");
//!
//! let failure = Failure::msg("disk full");
//! assert_eq!(failure.to_string(), "disk full");
//! assert!(!failure.is_panic());
//! ```
//!
//! [`Outcome::Err`]: crate::Outcome::Err

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// The accessor that was called on the wrong variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// `get_left` on a `Right`
    Left,
    /// `get_right` on a `Left`
    Right,
    /// `get_result` on an `Err`
    Result,
    /// `get_failure` on an `Ok`
    Failure,
}

impl Access {
    fn requested(self) -> &'static str {
        match self {
            Access::Left => "left",
            Access::Right => "right",
            Access::Result => "result",
            Access::Failure => "failure",
        }
    }

    fn found(self) -> &'static str {
        match self {
            Access::Left => "a Right",
            Access::Right => "a Left",
            Access::Result => "an Err",
            Access::Failure => "an Ok",
        }
    }
}

/// A value was requested from the variant that is not active.
///
/// This is a programmer error: check `is_left`/`is_ok` first, or use `fold`
/// or one of the `*_or_err` extractors instead.
///
/// # Examples
///
/// ```
/// use leftright::{Access, Outcome};
///
/// let outcome: Outcome<i32> = Outcome::ok(1);
/// let err = outcome.get_failure().unwrap_err();
/// assert_eq!(err.access(), Access::Failure);
/// assert_eq!(err.to_string(), "tried to get failure from an Ok");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoSuchElement {
    access: Access,
}

impl NoSuchElement {
    pub(crate) fn new(access: Access) -> Self {
        NoSuchElement { access }
    }

    /// The accessor that was attempted.
    pub fn access(&self) -> Access {
        self.access
    }
}

impl fmt::Display for NoSuchElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tried to get {} from {}",
            self.access.requested(),
            self.access.found()
        )
    }
}

impl StdError for NoSuchElement {}

/// A panic captured at an `Outcome` boundary.
///
/// Reach it through [`Failure::downcast_ref`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// The panic message, or `"<non-string panic payload>"` when the payload
    /// was neither `&str` nor `String`.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for Panicked {}

#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}

/// The failure carried by [`Outcome::Err`](crate::Outcome::Err).
///
/// `Failure` is cheap to clone. Two failures compare equal only when they
/// are clones of the same captured failure, and hashing follows the same
/// identity.
///
/// Any `E: std::error::Error + Send + Sync + 'static` converts into a
/// `Failure`, so `?` works inside the closures handed to
/// [`Outcome::attempt`](crate::Outcome::attempt).
///
/// # Examples
///
/// ```
/// use leftright::Failure;
///
/// let parse_err = "abc".parse::<i32>().unwrap_err();
/// let failure = Failure::from(parse_err);
///
/// assert!(failure.downcast_ref::<std::num::ParseIntError>().is_some());
/// assert_eq!(failure, failure.clone());
/// assert_ne!(failure, Failure::msg("invalid digit found in string"));
/// ```
#[derive(Clone)]
pub struct Failure {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Failure {
    /// Create a failure from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Failure {
            inner: Arc::new(Message(message.into())),
        }
    }

    /// Create a failure from an already boxed error.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Failure {
            inner: Arc::from(error),
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };

        Failure {
            inner: Arc::new(Panicked { message }),
        }
    }

    /// Returns `true` if this failure was produced by a captured panic.
    pub fn is_panic(&self) -> bool {
        self.inner.is::<Panicked>()
    }

    /// Attempt to view the underlying error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// The underlying error.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }
}

impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Failure {
            inner: Arc::new(error),
        }
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.inner).finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Failure {}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).cast::<()>().hash(state);
    }
}

// `Failure` cannot implement `Error` itself without conflicting with the
// blanket `From<E>` above, so conversion into a boxed error goes through this.
#[derive(Debug)]
struct Shared(Failure);

impl fmt::Display for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for Shared {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.as_error())
    }
}

impl From<Failure> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(failure: Failure) -> Self {
        Box::new(Shared(failure))
    }
}
