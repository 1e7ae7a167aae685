//! Testing utilities for code built on `Either` and `Outcome`.
//!
//! Provides assertion macros that report the unexpected payload on failure,
//! and, with the `proptest` feature, `Arbitrary` implementations so both
//! types can be generated directly in property tests.
//!
//! # Examples
//!
//! ```rust
//! use leftright::{assert_err, assert_left, assert_ok, assert_right};
//! use leftright::{Either, Failure, Outcome};
//!
//! assert_left!(Either::<_, i32>::left("a"));
//! assert_right!(Either::<&str, _>::right(1));
//!
//! assert_ok!(Outcome::ok(1));
//! assert_err!(Outcome::<i32>::err(Failure::msg("boom")));
//! ```

/// Assert that an `Either` is a `Left`.
///
/// Panics with the right value if it is a `Right`.
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(r) => {
                panic!("Expected Left, got Right: {:?}", r);
            }
        }
    };
}

/// Assert that an `Either` is a `Right`.
///
/// Panics with the left value if it is a `Left`.
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(l) => {
                panic!("Expected Right, got Left: {:?}", l);
            }
        }
    };
}

/// Assert that an `Outcome` is `Ok`.
///
/// Panics with the captured failure if it is an `Err`.
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(_) => {}
            $crate::Outcome::Err(failure) => {
                panic!("Expected Ok, got Err: {}", failure);
            }
        }
    };
}

/// Assert that an `Outcome` is `Err`.
///
/// Panics with the value if it is an `Ok`.
#[macro_export]
macro_rules! assert_err {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Err(_) => {}
            $crate::Outcome::Ok(v) => {
                panic!("Expected Err, got Ok: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{Either, Failure, Outcome};

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(Either::Left),
            any_with::<R>(r_params).prop_map(Either::Right),
        ]
        .boxed()
    }
}

/// Generated failures are built with [`Failure::msg`] from an arbitrary
/// string.
#[cfg(feature = "proptest")]
impl<T> Arbitrary for Outcome<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Outcome::Ok),
            any::<String>().prop_map(|msg| Outcome::Err(Failure::msg(msg))),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Either, Failure, Outcome};

    #[test]
    fn assert_left_macro() {
        assert_left!(Either::<_, i32>::left("a"));
    }

    #[test]
    fn assert_ok_macro() {
        assert_ok!(Outcome::attempt(|| "7".parse::<u8>()));
    }

    #[test]
    #[should_panic(expected = "Expected Left, got Right: 42")]
    fn assert_left_panics_on_right() {
        assert_left!(Either::<&str, _>::right(42));
    }

    #[test]
    #[should_panic(expected = "Expected Right, got Left: \"oops\"")]
    fn assert_right_panics_on_left() {
        assert_right!(Either::<_, i32>::left("oops"));
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Err: boom")]
    fn assert_ok_panics_on_err() {
        assert_ok!(Outcome::<i32>::err(Failure::msg("boom")));
    }

    #[test]
    #[should_panic(expected = "Expected Err, got Ok: 3")]
    fn assert_err_panics_on_ok() {
        assert_err!(Outcome::ok(3));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn either_arbitrary_generates_valid_instances(e in any::<Either<i32, String>>()) {
                prop_assert!(e.is_left() != e.is_right());
            }

            #[test]
            fn outcome_arbitrary_generates_valid_instances(o in any::<Outcome<u8>>()) {
                prop_assert!(o.is_ok() != o.is_err());
            }
        }
    }
}
