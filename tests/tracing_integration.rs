//! Diagnostics emitted when the `tracing` feature is enabled.

use leftright::{CollectEither, Either, Failure, Outcome};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn returned_error_logs_captured_failure() {
    let outcome = Outcome::attempt(|| "nope".parse::<i32>());

    assert!(outcome.is_err());
    assert!(logs_contain("captured failure"));
    assert!(!logs_contain("captured panic"));
}

#[test]
#[traced_test]
fn panic_logs_captured_panic() {
    let outcome = Outcome::ok(3).map(|x: i32| -> i32 {
        if std::hint::black_box(true) {
            panic!("bad input {}", x);
        }
        x
    });

    assert!(outcome.is_err());
    assert!(logs_contain("captured panic"));
    assert!(logs_contain("bad input 3"));
}

#[test]
#[traced_test]
fn success_logs_nothing() {
    let outcome = Outcome::attempt(|| Ok::<_, Failure>(1)).map(|x| x + 1);

    assert_eq!(outcome, Outcome::ok(2));
    assert!(!logs_contain("captured"));
}

#[test]
#[traced_test]
fn collector_logs_finish() {
    let result = vec![Either::<&str, i32>::left("a"), Either::right(1)]
        .into_iter()
        .collect_left_biased();

    assert_eq!(result, Either::left(vec!["a"]));
    assert!(logs_contain("finishing either collection"));
}
