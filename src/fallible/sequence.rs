//! Collapsing many fallible values into one.
//!
//! Two related transforms live here:
//!
//! - [`sequence_results`] turns a sequence of `Result<T, E>` inside out into
//!   a `Result<Vec<T>, E>`: all successes in input order, or the first error.
//! - [`fold_map_results`] goes one step further and reduces the successes
//!   with a [`Monoid`], so a list of raw inputs becomes a single fallible
//!   aggregate.
//!
//! Both are pure data transforms. Whatever side effects produced the input
//! `Result`s have already happened by the time these functions look at them.

use crate::typeclass::Monoid;

/// Turns an ordered sequence of `Result`s into a `Result` of an ordered
/// sequence.
///
/// The output is `Ok` iff every element is `Ok`, with the success values in
/// input order. Otherwise it is the first `Err` encountered left to right;
/// the content of later errors is irrelevant.
///
/// # Errors
///
/// Returns the error of the first failing element.
///
/// # Examples
///
/// ```rust
/// use combinars::fallible::sequence_results;
///
/// let all_good: Vec<Result<i64, &str>> = vec![Ok(1), Ok(2), Ok(3)];
/// assert_eq!(sequence_results(all_good), Ok(vec![1, 2, 3]));
///
/// let mixed: Vec<Result<i64, &str>> = vec![Ok(1), Err("first"), Err("second")];
/// assert_eq!(sequence_results(mixed), Err("first"));
/// ```
pub fn sequence_results<I, T, E>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let iterator = results.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for result in iterator {
        match result {
            Ok(value) => values.push(value),
            Err(error) => return Err(error),
        }
    }
    Ok(values)
}

/// Parses every item, sequences the outcomes, and combines the successes.
///
/// The pipeline is: apply `parse` to each item left to right, then
/// [`sequence_results`], then [`Monoid::combine_all`] on success. The net
/// effect is a single `Result`: the combined value when every parse
/// succeeds, or the first error in input order when any fails.
///
/// The mapping pass itself does not short-circuit - `parse` runs on every
/// item, so any side effects it has happen exactly once per item regardless
/// of earlier failures. Only the sequencing step afterwards picks the first
/// error.
///
/// The monoid used for the reduction is chosen by the caller through the
/// output type of `parse`: map into [`Product`](crate::typeclass::Product)
/// to multiply, into `String` to concatenate, and so on.
///
/// # Errors
///
/// Returns the error of the first item whose parse failed.
///
/// # Examples
///
/// ```rust
/// use combinars::fallible::{fold_map_results, parse_int, ArithError};
/// use combinars::typeclass::Product;
///
/// let product = fold_map_results(["1", "2", "3"], |s| parse_int(s).map(Product::new));
/// assert_eq!(product, Ok(Product(6)));
///
/// let failed = fold_map_results(["1", "foo", "3"], |s| parse_int(s).map(Product::new));
/// assert_eq!(failed, Err(ArithError::Parse { input: String::from("foo") }));
/// ```
pub fn fold_map_results<I, S, T, E, F>(items: I, parse: F) -> Result<T, E>
where
    I: IntoIterator<Item = S>,
    F: FnMut(S) -> Result<T, E>,
    T: Monoid,
{
    // Collect the whole mapping pass before sequencing so every item is
    // parsed even when an early one fails.
    let results: Vec<Result<T, E>> = items.into_iter().map(parse).collect();
    sequence_results(results).map(T::combine_all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Product, Sum};
    use rstest::rstest;
    use std::cell::Cell;

    // =========================================================================
    // sequence_results Tests
    // =========================================================================

    #[rstest]
    fn sequence_all_successes() {
        let results: Vec<Result<i64, &str>> = vec![Ok(1), Ok(2), Ok(3)];
        assert_eq!(sequence_results(results), Ok(vec![1, 2, 3]));
    }

    #[rstest]
    fn sequence_preserves_input_order() {
        let results: Vec<Result<i64, &str>> = vec![Ok(3), Ok(1), Ok(2)];
        assert_eq!(sequence_results(results), Ok(vec![3, 1, 2]));
    }

    #[rstest]
    fn sequence_empty_input() {
        let results: Vec<Result<i64, &str>> = vec![];
        assert_eq!(sequence_results(results), Ok(vec![]));
    }

    #[rstest]
    fn sequence_first_failure_wins() {
        let results: Vec<Result<i64, &str>> = vec![Ok(1), Err("first"), Err("second")];
        assert_eq!(sequence_results(results), Err("first"));
    }

    #[rstest]
    fn sequence_failure_in_last_position() {
        let results: Vec<Result<i64, &str>> = vec![Ok(1), Ok(2), Err("tail")];
        assert_eq!(sequence_results(results), Err("tail"));
    }

    // =========================================================================
    // fold_map_results Tests
    // =========================================================================

    #[rstest]
    fn fold_map_combines_successes() {
        let result = fold_map_results(vec![1i64, 2, 3], |n| Ok::<_, String>(Sum::new(n)));
        assert_eq!(result, Ok(Sum::new(6)));
    }

    #[rstest]
    fn fold_map_empty_input_yields_identity() {
        let inputs: Vec<i64> = vec![];
        let result = fold_map_results(inputs, |n| Ok::<_, String>(Product::new(n)));
        assert_eq!(result, Ok(Product::new(1)));
    }

    #[rstest]
    fn fold_map_returns_first_error() {
        let result = fold_map_results(vec![1i64, -2, -3], |n| {
            if n >= 0 {
                Ok(Sum::new(n))
            } else {
                Err(format!("{n} is negative"))
            }
        });
        assert_eq!(result, Err(String::from("-2 is negative")));
    }

    /// The mapping pass visits every item even after a failure; only the
    /// sequencing afterwards short-circuits.
    #[rstest]
    fn fold_map_parses_every_item() {
        let invocations = Cell::new(0u32);
        let result = fold_map_results(vec![1i64, -2, 3], |n| {
            invocations.set(invocations.get() + 1);
            if n >= 0 {
                Ok(Sum::new(n))
            } else {
                Err(String::from("negative"))
            }
        });

        assert_eq!(result, Err(String::from("negative")));
        assert_eq!(invocations.get(), 3);
    }
}
