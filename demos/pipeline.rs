//! Record import pipeline
//!
//! Parses raw order lines, validates each one with `Either`, prices them
//! with `Outcome::attempt`, and then aggregates the batch with both
//! collector biases.
//!
//! Run with: cargo run --example pipeline
//! With diagnostics: cargo run --example pipeline --features tracing

use leftright::prelude::*;
use std::fmt;

// ============================================================================
// Domain Types
// ============================================================================

#[derive(Debug, Clone)]
struct Order {
    sku: String,
    quantity: u32,
    unit_cents: u32,
}

#[derive(Debug, Clone, PartialEq)]
enum ImportError {
    MissingField { line: usize, field: &'static str },
    BadNumber { line: usize, value: String },
    Pricing { line: usize, reason: String },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::MissingField { line, field } => {
                write!(f, "line {}: missing {}", line, field)
            }
            ImportError::BadNumber { line, value } => {
                write!(f, "line {}: {:?} is not a number", line, value)
            }
            ImportError::Pricing { line, reason } => write!(f, "line {}: {}", line, reason),
        }
    }
}

// ============================================================================
// Steps
// ============================================================================

fn split(line: usize, raw: &str) -> Either<ImportError, Vec<String>> {
    let fields: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    let missing = ["sku", "quantity", "unit price"]
        .iter()
        .zip(fields.iter().map(String::as_str).chain(std::iter::repeat("")))
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| *field);

    match missing {
        Some(field) => Either::left(ImportError::MissingField { line, field }),
        None => Either::right(fields),
    }
}

fn number(line: usize, value: &str) -> Either<ImportError, u32> {
    Either::from_result(value.parse::<u32>().map_err(|_| ImportError::BadNumber {
        line,
        value: value.to_string(),
    }))
}

fn parse(line: usize, raw: &str) -> Either<ImportError, Order> {
    split(line, raw).flat_map_right(|fields| {
        number(line, &fields[1]).flat_map_right(|quantity| {
            number(line, &fields[2]).map_right(|unit_cents| Order {
                sku: fields[0].clone(),
                quantity,
                unit_cents,
            })
        })
    })
}

// Overflow is reported as a pricing failure rather than aborting the batch.
fn price(line: usize, order: Order) -> Either<ImportError, (String, u32)> {
    Outcome::attempt(|| {
        order
            .quantity
            .checked_mul(order.unit_cents)
            .ok_or_else(|| Failure::msg("total exceeds u32"))
            .map(|total| (order.sku.clone(), total))
    })
    .into_either()
    .map_left(|failure| ImportError::Pricing {
        line,
        reason: failure.to_string(),
    })
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    let batch = [
        "apple, 3, 120",
        "pear, x, 80",
        "melon, 2",
        "grape, 100000, 100000",
        "plum, 10, 45",
    ];

    let priced: Vec<Either<ImportError, (String, u32)>> = batch
        .iter()
        .enumerate()
        .map(|(i, raw)| parse(i + 1, raw).flat_map_right(|order| price(i + 1, order)))
        .collect();

    println!("=== Strict import (left-biased) ===");
    match priced.clone().into_iter().collect_left_biased() {
        Either::Left(errors) => {
            println!("rejected batch with {} error(s):", errors.len());
            for e in errors {
                println!("  {}", e);
            }
        }
        Either::Right(totals) => println!("accepted {} orders", totals.len()),
    }

    println!("\n=== Lenient import (right-biased) ===");
    EitherCollector::to_right_biased().collect(priced).run(
        |errors| println!("nothing importable, {} error(s)", errors.len()),
        |totals| {
            for (sku, cents) in &totals {
                println!("  {:<8} {:>6}.{:02}", sku, cents / 100, cents % 100);
            }
            let sum: u64 = totals.iter().map(|(_, c)| u64::from(*c)).sum();
            println!("  total    {:>6}.{:02}", sum / 100, sum % 100);
        },
    );
}
