//! Pure helper functions applied by the composer
//!
//! - `to_upper` - render a string as a quoted, escaped literal
//! - `concat` - join two strings with no separator
//! - `sum` - left-fold addition seeded at 0
//!
//! The composer reaches these through the [`Library`] trait so the set of
//! functions is a value passed in explicitly rather than ambient state.
//!
//! # Examples
//!
//! ```
//! use config_composer::library::{concat, sum, to_upper};
//!
//! assert_eq!(to_upper("example"), "\"example\"");
//! assert_eq!(concat("example", "-1.0.0"), "example-1.0.0");
//! assert_eq!(sum(&[1, 2, 3, 4, 5]).unwrap(), 15);
//! ```

use crate::config::attrs::value_kind;
use crate::error::{ComposerError, ErrorCode, Result};
use serde_json::Value;
use tracing::trace;

/// The helper functions available to the composer
pub trait Library {
    /// Quoted rendering of `s`; see [`to_upper`]
    fn to_upper(&self, s: &str) -> String;

    /// `a` immediately followed by `b`
    fn concat(&self, a: &str, b: &str) -> String;

    /// Left-fold addition over `xs`, starting from 0
    fn sum(&self, xs: &[i64]) -> Result<i64>;

    /// [`Library::sum`] over untyped values; non-integers are rejected
    fn sum_values(&self, xs: &[Value]) -> Result<i64> {
        self.sum(&integers(xs)?)
    }
}

/// The library every evaluation uses unless a caller supplies another
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardLibrary;

impl Library for StandardLibrary {
    fn to_upper(&self, s: &str) -> String {
        to_upper(s)
    }

    fn concat(&self, a: &str, b: &str) -> String {
        concat(a, b)
    }

    fn sum(&self, xs: &[i64]) -> Result<i64> {
        sum(xs)
    }
}

/// Pure: Render `s` as a quoted, escaped string literal
///
/// Letter case is left untouched. The name is kept because existing output
/// consumers expect `name` to carry the quoted form, e.g. `"\"example\""`.
/// Escaping follows JSON string rules.
///
/// ```
/// use config_composer::library::to_upper;
///
/// assert_eq!(to_upper("abc"), "\"abc\"");
/// assert_eq!(to_upper("say \"hi\""), r#""say \"hi\"""#);
/// ```
pub fn to_upper(s: &str) -> String {
    Value::from(s).to_string()
}

/// Pure: Concatenate two strings
///
/// No separator is inserted; callers splice one in themselves.
pub fn concat(a: &str, b: &str) -> String {
    let mut joined = String::with_capacity(a.len() + b.len());
    joined.push_str(a);
    joined.push_str(b);
    joined
}

/// Pure: Fold `xs` from the left, threading an accumulator through `f`
///
/// Elements are combined strictly left to right. The first error from `f`
/// stops the fold.
pub fn fold_left<I, A, F>(xs: I, seed: A, f: F) -> Result<A>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> Result<A>,
{
    xs.into_iter().try_fold(seed, f)
}

/// Pure: Sum integers with a left fold seeded at 0
///
/// Returns 0 for an empty slice. Overflowing `i64` is a computation error.
pub fn sum(xs: &[i64]) -> Result<i64> {
    let total = fold_left(xs.iter().copied(), 0i64, checked_add)?;
    trace!("sum of {} element(s) = {}", xs.len(), total);
    Ok(total)
}

/// Pure: Sum untyped values, rejecting anything that is not an integer
pub fn sum_values(xs: &[Value]) -> Result<i64> {
    sum(&integers(xs)?)
}

/// Pure: View untyped values as integers
///
/// The first element that is not an integer is reported as a computation
/// error of `sum`, carrying the offending value.
pub fn integers(xs: &[Value]) -> Result<Vec<i64>> {
    xs.iter()
        .map(|value| {
            value.as_i64().ok_or_else(|| {
                ComposerError::computation(
                    ErrorCode::COMPUTE_INVALID_ARGUMENT,
                    "sum",
                    format!("expected an integer, found {}", value_kind(value)),
                    Some(value.to_string()),
                )
            })
        })
        .collect()
}

fn checked_add(acc: i64, x: i64) -> Result<i64> {
    acc.checked_add(x).ok_or_else(|| {
        ComposerError::computation(
            ErrorCode::COMPUTE_OVERFLOW,
            "sum",
            format!("adding {} to {} overflows a 64-bit integer", x, acc),
            Some(x.to_string()),
        )
    })
}
