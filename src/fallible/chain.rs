//! Sequential composition of fallible steps.
//!
//! A fallible step is any function `T -> Result<U, E>`. Composing two of
//! them means running the first, and - only if it succeeded - feeding its
//! success value to the second. The first `Err` anywhere in the pipeline
//! becomes the result of the whole pipeline, and no later step runs at all.
//!
//! `Result::and_then` already is this operation; [`Chainable::chain`] gives
//! it a home of its own so the laws can be stated and tested against this
//! crate's vocabulary, and so longer pipelines read as what they are:
//!
//! ```rust
//! use combinars::fallible::{Chainable, parse_int, div_int};
//!
//! let quotient = parse_int("10").chain(|n| parse_int("2").chain(|d| div_int(n, d)));
//! assert_eq!(quotient, Ok(5));
//! ```
//!
//! # Laws
//!
//! `chain` is monadic bind for `Result`, so for all `a`, `m`, `f`, `g`:
//!
//! ## Left Identity
//!
//! ```text
//! Ok(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.chain(Ok) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```

/// Short-circuiting composition for fallible values.
///
/// Implemented for `Result<T, E>`; written as a trait so the operation and
/// its laws are a named part of this crate's surface rather than a stdlib
/// footnote.
///
/// # Examples
///
/// ```rust
/// use combinars::fallible::Chainable;
///
/// fn half(n: i64) -> Result<i64, String> {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) }
/// }
///
/// let ok: Result<i64, String> = Ok(8);
/// assert_eq!(ok.chain(half).chain(half), Ok(2));
///
/// let stops: Result<i64, String> = Ok(6);
/// assert_eq!(stops.chain(half).chain(half), Err(String::from("3 is odd")));
/// ```
pub trait Chainable<T, E> {
    /// Runs `step` on the success value, or propagates the failure.
    ///
    /// Evaluation is strictly left to right: when `self` is `Err`, `step`
    /// is never invoked and the error passes through unchanged.
    #[must_use]
    fn chain<U, F>(self, step: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;
}

impl<T, E> Chainable<T, E> for Result<T, E> {
    fn chain<U, F>(self, step: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(value) => step(value),
            Err(error) => Err(error),
        }
    }
}
