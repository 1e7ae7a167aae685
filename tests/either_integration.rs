//! Behavioral contracts of `Either`, exercised through the public API.

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use leftright::{assert_left, assert_right, Access, Either};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone, PartialEq)]
enum StepError {
    InvalidRequest,
    InvalidIntermediate,
}

#[derive(Debug, Clone, PartialEq)]
struct Request {
    valid: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Intermediate {
    valid: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Final(u32);

fn step1(request: Request) -> Either<StepError, Intermediate> {
    if request.valid {
        Either::right(Intermediate { valid: true })
    } else {
        Either::left(StepError::InvalidRequest)
    }
}

fn step2(intermediate: Intermediate) -> Either<StepError, u32> {
    if intermediate.valid {
        Either::right(41)
    } else {
        Either::left(StepError::InvalidIntermediate)
    }
}

#[test]
fn chained_pipeline_reaches_final_value() {
    let result = step1(Request { valid: true })
        .flat_map_right(step2)
        .map_right(|n| Final(n + 1));

    assert_eq!(result, Either::right(Final(42)));
}

#[test]
fn chained_pipeline_stops_at_first_left() {
    let step2_calls = Cell::new(0);

    let result = step1(Request { valid: false })
        .flat_map_right(|i| {
            step2_calls.set(step2_calls.get() + 1);
            step2(i)
        })
        .map_right(Final);

    assert_eq!(result, Either::left(StepError::InvalidRequest));
    assert_eq!(step2_calls.get(), 0);
}

#[test]
fn left_value_contract() {
    let e: Either<String, i32> = Either::left("v".to_string());

    assert!(e.is_left());
    assert!(!e.is_right());
    assert_eq!(e.clone().get_left(), Ok("v".to_string()));

    let err = e.get_right().unwrap_err();
    assert_eq!(err.access(), Access::Right);
    assert_eq!(err.to_string(), "tried to get right from a Left");
}

#[test]
fn either_constructor_is_right_biased() {
    assert_left!(Either::<&str, i32>::either(|| "x", || None));
    assert_right!(Either::<&str, i32>::either(|| "x", || Some(42)));
    assert_eq!(
        Either::<&str, i32>::either(|| "x", || Some(42)),
        Either::right(42)
    );
}

#[test]
fn transformations_invoke_only_the_active_side() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let on_left = |s: &str| {
        left_calls.set(left_calls.get() + 1);
        s.len()
    };
    let on_right = |n: i32| {
        right_calls.set(right_calls.get() + 1);
        n as usize
    };

    let left: Either<&str, i32> = Either::left("abc");
    let right: Either<&str, i32> = Either::right(7);

    assert_eq!(left.fold(on_left, on_right), 3);
    assert_eq!(right.map(on_left, on_right), Either::right(7));
    assert_eq!(
        left.flat_map(|s| Either::<usize, usize>::left(on_left(s)), |n| Either::right(on_right(n))),
        Either::left(3)
    );
    right.run(
        |s| {
            on_left(s);
        },
        |n| {
            on_right(n);
        },
    );

    assert_eq!(left_calls.get(), 2);
    assert_eq!(right_calls.get(), 2);
}

#[test]
fn flat_map_never_nests() {
    let f = |x: i32| x + 1;
    let g = |y: i32| y * 2;

    let e: Either<i32, i32> = Either::left(10);
    let out: Either<i32, i32> = e.flat_map(|x| Either::left(f(x)), |y| Either::right(g(y)));
    assert_eq!(out, Either::left(11));
}

#[test]
fn or_err_extractors_return_caller_errors() {
    let right: Either<&str, u16> = Either::right(8080);
    let err = right
        .left_or_err_with(|port| format!("expected a name, got port {}", port))
        .unwrap_err();
    assert_eq!(err, "expected a name, got port 8080");

    let left: Either<&str, u16> = Either::left("http");
    assert_eq!(left.right_or_err(|| "no port"), Err("no port"));
}

#[test]
fn equality_and_hashing() {
    let a: Either<&str, i32> = Either::left("a");

    assert_eq!(a, Either::left("a"));
    assert_ne!(Either::<&str, &str>::left("a"), Either::right("a"));
    assert_eq!(hash_of(&a), hash_of(&"a"));
}
